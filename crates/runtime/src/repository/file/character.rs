//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{CharacterId, CharacterRecord, CharacterRepository, RepositoryError, Result};

/// File-based implementation of CharacterRepository.
///
/// # File Format
///
/// Records are stored as `character_{id}.json` in pretty-printed JSON so they
/// can be inspected and hand-edited by operators. Writes go to a temp file
/// first and are renamed into place.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a character file.
    fn record_path(&self, id: CharacterId) -> PathBuf {
        self.base_dir.join(format!("character_{}.json", id))
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, record: &CharacterRecord) -> Result<()> {
        let path = self.record_path(record.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes =
            serde_json::to_vec_pretty(record).map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved character[{}] to {}", record.id, path.display());

        Ok(())
    }

    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let path = self.record_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: CharacterRecord = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        if record.id != id {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds character {}",
                path.display(),
                record.id
            )));
        }

        tracing::debug!("Loaded character[{}] from {}", id, path.display());

        Ok(Some(record))
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.record_path(id).exists()
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        let path = self.record_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted character[{}]", id);
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("character_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<CharacterId>()
            {
                ids.push(id);
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
