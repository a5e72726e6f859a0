//! Ledger state persistence.
//!
//! State lives in two named slots, each holding one JSON-serialized array:
//! `salaryRecords` and `clientsList`. Every mutation overwrites the affected
//! slot in full; there is no incremental persistence and no schema
//! versioning.

mod json_store;

pub use json_store::JsonStateStore;

use crate::error::StorageResult;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// The two persisted state slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The ordered sequence of salary records.
    Records,
    /// The client name registry.
    Clients,
}

impl Slot {
    /// Stable slot name, matching the original storage keys.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Records => "salaryRecords",
            Slot::Clients => "clientsList",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Persistence seam for the ledger.
///
/// The ledger is constructed over an injected backend so tests can run
/// against [`MemoryBackend`] instead of the filesystem.
pub trait StateBackend {
    /// Read a slot's raw JSON, `None` if the slot has never been written.
    fn read(&self, slot: Slot) -> StorageResult<Option<String>>;

    /// Overwrite a slot with new JSON content.
    fn write(&self, slot: Slot, json: &str) -> StorageResult<()>;
}

/// In-memory backend for headless ledger tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<Slot, String>>,
    fail_writes: Mutex<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a slot, e.g. with corrupted content.
    pub fn preload(&self, slot: Slot, json: impl Into<String>) {
        self.slots.lock().unwrap().insert(slot, json.into());
    }

    /// Make subsequent writes fail, simulating a full or read-only store.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self, slot: Slot) -> StorageResult<Option<String>> {
        Ok(self.slots.lock().unwrap().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, json: &str) -> StorageResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(crate::error::StorageError::WriteFailed {
                slot: slot.to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        self.slots.lock().unwrap().insert(slot, json.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names() {
        assert_eq!(Slot::Records.name(), "salaryRecords");
        assert_eq!(Slot::Clients.name(), "clientsList");
    }

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.read(Slot::Records).unwrap().is_none());

        backend.write(Slot::Records, "[]").unwrap();
        assert_eq!(backend.read(Slot::Records).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_backend_write_failure() {
        let backend = MemoryBackend::new();
        backend.set_fail_writes(true);
        assert!(backend.write(Slot::Clients, "[]").is_err());
    }
}
