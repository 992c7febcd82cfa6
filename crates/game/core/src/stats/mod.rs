//! Stat system.
//!
//! # Architecture
//!
//! ```text
//! [ StatProfile (persisted) ] + [ RaceModifierSet (static) ]
//!      ↓
//! [ DerivedStats (computed) ]
//!      ↓
//! [ ResourcePools (current values, clamped) ]
//!      ↓
//! [ CombatSnapshot (locked for one action) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: training stats and current pools only
//! 2. **Pull model**: callers re-derive after every mutation they perform
//! 3. **Deterministic**: integer arithmetic, no I/O or randomness

pub mod derived;
pub mod profile;
pub mod race;
pub mod resources;
pub mod snapshot;

pub use derived::{DerivedStats, base_recovery_time};
pub use profile::{StatProfile, TrainingStat};
pub use race::{Element, Multiplier, RaceModifierSet, RaceTable};
pub use resources::ResourcePools;
pub use snapshot::CombatSnapshot;
