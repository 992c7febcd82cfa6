//! Ability catalog, tier gate and per-character ability book.
//!
//! Skills are grouped by tree and spells by element. Unlocking tier t requires
//! a number of owned tier t-1 entries in the same group; the gate is a pure
//! predicate over the owned set and never mutates it.

mod book;
mod catalog;
mod error;
mod tier;

pub use book::AbilityBook;
pub use catalog::{AbilityCatalog, AbilityId, AbilityKind, CatalogEntry, UnlockStatus};
pub use error::AbilityError;
pub use tier::Tier;
