//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during play: one record per
//! character holding its sheet. Static rules content (races, abilities,
//! config) is loaded by `tactics-content`, not stored here.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileCharacterRepository;
pub use memory::InMemoryCharacterRepository;
pub use traits::CharacterRepository;
pub use types::{CharacterId, CharacterRecord};
