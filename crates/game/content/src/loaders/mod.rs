//! Content loaders for reading rules data from files.
//!
//! Races and the ability catalog are RON, the rules configuration is TOML.

pub mod abilities;
pub mod config;
pub mod factory;
pub mod races;

pub use abilities::{AbilityCatalogFile, AbilityLoader};
pub use config::ConfigLoader;
pub use factory::{ContentFactory, RulesContent};
pub use races::{RaceCatalog, RaceLoader, RaceSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
