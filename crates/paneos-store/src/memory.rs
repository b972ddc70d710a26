//! In-memory store implementation for testing.
//!
//! Provides a BTreeMap-based store that doesn't persist data.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::KvStore;

/// In-memory key-value store for testing.
pub struct MemoryStore {
    /// Entry storage (key -> value)
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
    /// When set, writes fail with a backend error (for testing)
    fail_writes: Cell<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            fail_writes: Cell::new(false),
        }
    }

    /// Make subsequent writes fail (for testing soft-fail paths).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::invalid_key("(empty)"));
    }
    Ok(())
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        check_key(key)?;
        if self.fail_writes.get() {
            return Err(StoreError::backend("write failure injected"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
