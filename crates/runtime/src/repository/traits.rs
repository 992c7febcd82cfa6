//! Repository contracts for saving and loading mutable runtime state.

use super::error::Result;
use super::types::{CharacterId, CharacterRecord};

/// Repository for character persistence.
///
/// This is for DYNAMIC data that changes during play: training stats, the
/// training ledger and learned abilities. Race tables and the ability catalog
/// are static content and come from loaders instead.
pub trait CharacterRepository: Send + Sync {
    /// Save (insert or replace) a character record.
    fn save(&self, record: &CharacterRecord) -> Result<()>;

    /// Load a character record by id.
    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>>;

    /// Check if a character exists.
    fn exists(&self, id: CharacterId) -> bool;

    /// Delete a character. Deleting a missing id is not an error.
    fn delete(&self, id: CharacterId) -> Result<()>;

    /// List all stored character ids in ascending order.
    fn list_ids(&self) -> Result<Vec<CharacterId>>;

    /// Next unused id.
    fn next_id(&self) -> Result<CharacterId> {
        let ids = self.list_ids()?;
        Ok(CharacterId(ids.last().map_or(1, |last| last.0 + 1)))
    }
}
