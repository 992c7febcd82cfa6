//! Content factory for loading every rules data file from one directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tactics_core::{AbilityCatalog, RaceTable, RulesConfig};

use crate::loaders::{AbilityLoader, ConfigLoader, LoadResult, RaceLoader};

/// Everything the rules need from disk.
#[derive(Debug, Clone)]
pub struct RulesContent {
    pub races: RaceTable,
    pub abilities: AbilityCatalog,
    pub config: RulesConfig,
}

/// Content factory that loads rules content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── races.ron
/// └── abilities.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "rules.toml";
    pub const RACES_FILE: &'static str = "races.ron";
    pub const ABILITIES_FILE: &'static str = "abilities.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `rules.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the race table from `races.ron`.
    pub fn load_races(&self) -> LoadResult<RaceTable> {
        let path = self.data_dir.join(Self::RACES_FILE);
        RaceLoader::load(&path)
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        let path = self.data_dir.join(Self::ABILITIES_FILE);
        AbilityLoader::load(&path)
    }

    pub fn load_all(&self) -> LoadResult<RulesContent> {
        Ok(RulesContent {
            races: self.load_races().context("loading races")?,
            abilities: self.load_abilities().context("loading abilities")?,
            config: self.load_config().context("loading rules config")?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), RulesConfig::default());
        assert!(factory.load_races().is_err());
    }
}
