//! Shared types for repository layer.

mod character;

pub use character::{CharacterId, CharacterRecord};
