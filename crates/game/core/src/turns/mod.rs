//! Recovery-time turn order.
//!
//! Combatants act in order of lowest remaining RT; acting assigns a new RT
//! derived from the combatant's base RT and the weight of the action taken.

mod scheduler;
mod weight;

pub use scheduler::{CombatantId, Tick, TurnError, TurnScheduler};
pub use weight::{ActionWeight, recovery_time};
