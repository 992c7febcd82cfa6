use std::collections::BTreeSet;

use crate::config::RulesConfig;

use super::catalog::{AbilityCatalog, AbilityId};
use super::error::AbilityError;

/// Abilities a character has learned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityBook {
    learned: BTreeSet<AbilityId>,
}

impl AbilityBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &AbilityId) -> bool {
        self.learned.contains(id)
    }

    pub fn owned(&self) -> &BTreeSet<AbilityId> {
        &self.learned
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityId> {
        self.learned.iter()
    }

    pub fn len(&self) -> usize {
        self.learned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.learned.is_empty()
    }

    /// Learn `id`, paying its tier cost from `wallet`.
    ///
    /// Checks run in order: catalog membership, already learned, tier gate,
    /// cost. Nothing changes unless every check passes. Returns the remaining
    /// ability points.
    pub fn learn(
        &mut self,
        catalog: &AbilityCatalog,
        id: &AbilityId,
        wallet: &mut u32,
        config: &RulesConfig,
    ) -> Result<u32, AbilityError> {
        let entry = catalog
            .get(id)
            .ok_or_else(|| AbilityError::UnknownAbility(id.clone()))?;

        if self.learned.contains(id) {
            return Err(AbilityError::AlreadyLearned(id.clone()));
        }

        let status = catalog.unlock_status(entry, &self.learned);
        if !status.unlocked() {
            return Err(AbilityError::TierLocked {
                tier: entry.tier,
                needed: status.needed,
                have: status.have,
            });
        }

        let cost = config.tier_cost(entry.tier);
        if *wallet < cost {
            return Err(AbilityError::InsufficientPoints {
                cost,
                available: *wallet,
            });
        }

        *wallet -= cost;
        self.learned.insert(id.clone());
        Ok(*wallet)
    }
}

impl FromIterator<AbilityId> for AbilityBook {
    fn from_iter<I: IntoIterator<Item = AbilityId>>(iter: I) -> Self {
        Self {
            learned: iter.into_iter().collect(),
        }
    }
}
