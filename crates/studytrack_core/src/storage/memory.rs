//! In-memory key-value storage for tests and ephemeral runs.

use super::{Storage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// HashMap-backed `Storage`. Nothing survives the process.
///
/// Interior mutability keeps the trait surface identical to the SQLite
/// implementation; the crate is single-threaded by design.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, useful for shaping test fixtures.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
