//! Combat snapshot - everything a resolver needs about one combatant.
//!
//! Captured once at the start of an action so that every formula evaluated
//! for that action sees the same values.

use std::collections::BTreeMap;

use super::derived::DerivedStats;
use super::profile::StatProfile;
use super::race::{Element, Multiplier, RaceModifierSet};
use super::resources::ResourcePools;

/// Immutable view of a combatant for the duration of one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSnapshot {
    pub profile: StatProfile,
    pub derived: DerivedStats,
    /// Current pools, already clamped to `derived`.
    pub pools: ResourcePools,
    /// Racial resist percentages, copied from the race set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: BTreeMap<Element, i32>,
}

impl CombatSnapshot {
    /// Derive stats and clamp `pools` to the new maximums.
    pub fn capture(profile: &StatProfile, race: &RaceModifierSet, pools: ResourcePools) -> Self {
        let derived = DerivedStats::derive(profile, race);
        Self {
            profile: *profile,
            derived,
            pools: pools.clamped(&derived),
            resistances: race.resistances.clone(),
        }
    }

    /// Snapshot at full HP and resource.
    pub fn at_full(profile: &StatProfile, race: &RaceModifierSet) -> Self {
        let derived = DerivedStats::derive(profile, race);
        Self {
            profile: *profile,
            derived,
            pools: ResourcePools::at_max(&derived),
            resistances: race.resistances.clone(),
        }
    }

    /// Element bonus after this combatant's resistance to `element`.
    pub fn resist_adjusted(&self, element: Element, bonus: Multiplier) -> Multiplier {
        bonus.resisted(self.resistances.get(&element).copied().unwrap_or(0))
    }

    pub fn is_alive(&self) -> bool {
        self.pools.is_alive()
    }
}
