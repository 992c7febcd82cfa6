//! In-memory repository implementations for testing and development.

mod character;

pub use character::InMemoryCharacterRepository;
