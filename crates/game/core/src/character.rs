//! Character sheet: everything persisted for one character.
//!
//! The sheet bundles the explicit context every rules operation needs so
//! callers hold one value per character. Derived stats are never stored;
//! they are recomputed from the profile and race on demand.

use chrono::{DateTime, Utc};

use crate::abilities::{AbilityBook, AbilityCatalog, AbilityError, AbilityId};
use crate::config::RulesConfig;
use crate::stats::{CombatSnapshot, DerivedStats, RaceTable, ResourcePools, StatProfile, TrainingStat};
use crate::training::{
    AbilityPointAward, Allocation, SessionAward, TrainingError, TrainingLedger, TrainingStatus,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub name: String,
    /// Race key; unknown keys derive with the baseline modifiers.
    pub race: String,
    pub profile: StatProfile,
    pub ledger: TrainingLedger,
    pub abilities: AbilityBook,
    /// Current HP and resource, kept within the derived maximums.
    pub pools: ResourcePools,
}

impl CharacterSheet {
    /// New character at starting stats with full pools.
    pub fn new(name: impl Into<String>, race: impl Into<String>, races: &RaceTable) -> Self {
        Self::with_profile(name, race, StatProfile::default(), races)
    }

    pub fn with_profile(
        name: impl Into<String>,
        race: impl Into<String>,
        profile: StatProfile,
        races: &RaceTable,
    ) -> Self {
        let race = race.into();
        let derived = races.derive(&profile, &race);
        Self {
            name: name.into(),
            race,
            profile,
            ledger: TrainingLedger::default(),
            abilities: AbilityBook::new(),
            pools: ResourcePools::at_max(&derived),
        }
    }

    pub fn derived(&self, races: &RaceTable) -> DerivedStats {
        races.derive(&self.profile, &self.race)
    }

    pub fn level(&self) -> u32 {
        self.profile.level()
    }

    pub fn snapshot(&self, races: &RaceTable) -> CombatSnapshot {
        CombatSnapshot::capture(&self.profile, races.lookup(&self.race), self.pools)
    }

    pub fn preview_train(&self, stat: TrainingStat, count: u32) -> Result<Allocation, TrainingError> {
        self.ledger.preview_allocate(&self.profile, stat, count)
    }

    /// Commit an allocation, then clamp pools to the re-derived maximums.
    pub fn train(
        &mut self,
        stat: TrainingStat,
        count: u32,
        races: &RaceTable,
    ) -> Result<Allocation, TrainingError> {
        let allocation = self.ledger.allocate(&mut self.profile, stat, count)?;
        self.pools.clamp_to(&self.derived(races));
        Ok(allocation)
    }

    pub fn grant_bonus(&mut self, amount: u32) -> u32 {
        self.ledger.grant_bonus(amount)
    }

    pub fn award_session(&mut self, now: DateTime<Utc>, config: &RulesConfig) -> SessionAward {
        let level = self.level();
        self.ledger.award_session(now, level, config)
    }

    pub fn earn_ability_points(
        &mut self,
        now: DateTime<Utc>,
        amount: u32,
        config: &RulesConfig,
    ) -> Result<AbilityPointAward, TrainingError> {
        self.ledger.earn_ability_points(now, amount, config)
    }

    /// Learn an ability, paying from the ledger's ability points.
    pub fn learn_ability(
        &mut self,
        catalog: &AbilityCatalog,
        id: &AbilityId,
        config: &RulesConfig,
    ) -> Result<u32, AbilityError> {
        self.abilities
            .learn(catalog, id, &mut self.ledger.ability_points, config)
    }

    pub fn training_status(&mut self, now: DateTime<Utc>, config: &RulesConfig) -> TrainingStatus {
        let level = self.level();
        self.ledger.status(now, level, config)
    }

    /// Restore HP and resource to their maximums.
    pub fn rest(&mut self, races: &RaceTable) {
        self.pools = ResourcePools::at_max(&self.derived(races));
    }
}
