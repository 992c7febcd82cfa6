//! File-based repository implementations.

mod character;

pub use character::FileCharacterRepository;
