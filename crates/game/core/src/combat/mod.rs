//! Combat resolution.
//!
//! Pure functions over combat snapshots and derived stats. Terrain, facing and
//! element bonuses come from the caller; random rolls are passed in so every
//! result is reproducible.
//!
//! - `resolve_attack`: dodge check, crit check, then damage
//! - `physical_dodge_chance` / `ether_dodge_chance`: dodge percentages
//! - `physical_damage` / `ether_damage`: damage with floor and cap
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod dodge;
pub mod result;

pub use damage::{DamageType, apply_damage, damage_cap, ether_damage, physical_damage};
pub use dodge::{
    EtherDodgeParams, PhysicalDodgeParams, check_dodge, ether_dodge_chance, physical_dodge_chance,
};
pub use result::{AttackKind, AttackOutcome, AttackParams, AttackResult, AttackRolls, resolve_attack};
