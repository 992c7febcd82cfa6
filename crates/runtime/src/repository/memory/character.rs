//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::repository::{CharacterId, CharacterRecord, CharacterRepository, RepositoryError, Result};

/// In-memory implementation of CharacterRepository.
pub struct InMemoryCharacterRepository {
    records: RwLock<BTreeMap<CharacterId, CharacterRecord>>,
}

impl InMemoryCharacterRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    fn save(&self, record: &CharacterRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(record.id, record.clone());
        Ok(())
    }

    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.keys().copied().collect())
    }
}
