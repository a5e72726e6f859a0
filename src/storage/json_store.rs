//! JSON file-based state storage.
//!
//! Stores each state slot as a separate pretty-printed JSON file under the
//! application data directory.

use crate::error::{StorageError, StorageResult};
use crate::storage::{Slot, StateBackend};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed state store, one JSON file per slot.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    state_dir: PathBuf,
}

impl JsonStateStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(state_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let state_dir = state_dir.into();

        fs::create_dir_all(&state_dir)
            .map_err(|e| StorageError::DirectoryError(e.to_string()))?;

        Ok(Self { state_dir })
    }

    /// Create a store under the default application data directory.
    pub fn open_default() -> StorageResult<Self> {
        let paths = crate::config::Paths::get();
        Self::new(paths.state_dir())
    }

    /// Directory holding the slot files.
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn slot_file(&self, slot: Slot) -> PathBuf {
        let file = match slot {
            Slot::Records => "salary_records.json",
            Slot::Clients => "clients.json",
        };
        self.state_dir.join(file)
    }
}

impl StateBackend for JsonStateStore {
    fn read(&self, slot: Slot) -> StorageResult<Option<String>> {
        let file = self.slot_file(slot);

        if !file.exists() {
            return Ok(None);
        }

        fs::read_to_string(&file)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed {
                slot: slot.to_string(),
                reason: e.to_string(),
            })
    }

    fn write(&self, slot: Slot, json: &str) -> StorageResult<()> {
        let file = self.slot_file(slot);

        fs::write(&file, json).map_err(|e| StorageError::WriteFailed {
            slot: slot.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unwritten_slot_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonStateStore::new(dir.path()).unwrap();
        assert!(store.read(Slot::Records).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = JsonStateStore::new(dir.path()).unwrap();

        store.write(Slot::Clients, r#"["SAMASHTI"]"#).unwrap();
        assert_eq!(
            store.read(Slot::Clients).unwrap().as_deref(),
            Some(r#"["SAMASHTI"]"#)
        );
    }

    #[test]
    fn test_slots_use_separate_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonStateStore::new(dir.path()).unwrap();

        store.write(Slot::Records, "[]").unwrap();
        store.write(Slot::Clients, "[]").unwrap();

        assert!(dir.path().join("salary_records.json").exists());
        assert!(dir.path().join("clients.json").exists());
    }

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonStateStore::new(&nested).unwrap();
        store.write(Slot::Records, "[]").unwrap();
        assert!(nested.join("salary_records.json").exists());
    }
}
