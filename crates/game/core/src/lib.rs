//! Deterministic tactical RPG rules.
//!
//! `tactics-core` defines the canonical rules (stat derivation, training
//! economy, turn order, combat and ability gating) as pure APIs shared by the
//! authoritative runtime and offline tools. Operations take the state they
//! act on explicitly; there is no global "current character", no I/O and no
//! logging here.
pub mod abilities;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod stats;
pub mod training;
pub mod turns;

pub use abilities::{
    AbilityBook, AbilityCatalog, AbilityError, AbilityId, AbilityKind, CatalogEntry, Tier,
    UnlockStatus,
};
pub use character::CharacterSheet;
pub use combat::{
    AttackKind, AttackOutcome, AttackParams, AttackResult, AttackRolls, DamageType,
    EtherDodgeParams, PhysicalDodgeParams, apply_damage, damage_cap, ether_damage,
    ether_dodge_chance, physical_damage, physical_dodge_chance, resolve_attack,
};
pub use config::{LevelCap, RulesConfig};
pub use error::{ErrorSeverity, RulesError};
pub use stats::{
    CombatSnapshot, DerivedStats, Element, Multiplier, RaceModifierSet, RaceTable,
    ResourcePools, StatProfile, TrainingStat,
};
pub use training::{
    AbilityPointAward, Allocation, ResetClock, ResetPeriod, SessionAward, TrainingError,
    TrainingLedger, TrainingStatus, parse_stat,
};
pub use turns::{ActionWeight, CombatantId, Tick, TurnError, TurnScheduler};
