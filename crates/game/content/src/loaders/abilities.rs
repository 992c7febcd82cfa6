//! Ability catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{AbilityCatalog, CatalogEntry};

use crate::loaders::{LoadResult, read_file};

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalogFile {
    pub abilities: Vec<CatalogEntry>,
}

/// Loader for the ability catalog from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load the ability catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let file: AbilityCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let mut catalog = AbilityCatalog::new();
        for entry in file.abilities {
            let id = entry.id.clone();
            if catalog.insert(entry).is_some() {
                anyhow::bail!("duplicate ability id: {}", id);
            }
        }

        Ok(catalog)
    }
}
