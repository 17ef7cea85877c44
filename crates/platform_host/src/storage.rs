//! Key/value snapshot storage contract and in-process implementations.
//!
//! Values are raw JSON text stored under a string key, which is exactly the shape of
//! `window.localStorage`. The contract is synchronous because the browser storage API is.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service persisting raw JSON snapshots by key.
pub trait SnapshotStorage {
    /// Loads the raw JSON stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the read fails.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Replaces the raw JSON stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write (for example
    /// when the browser quota is exceeded).
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Removes `key` from storage.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the delete fails.
    fn delete_raw(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Storage that remembers nothing. Used when persistence is switched off.
pub struct NoopSnapshotStorage;

impl SnapshotStorage for NoopSnapshotStorage {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_raw(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Session-scoped in-memory storage. Clones share the same entries.
pub struct MemorySnapshotStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySnapshotStorage {
    /// Creates storage pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, raw_json: impl Into<String>) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.into(), raw_json.into());
        storage
    }

    /// Returns a copy of the raw value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.get(key))
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_storage_overwrites_and_deletes() {
        let storage = MemorySnapshotStorage::default();
        let storage_obj: &dyn SnapshotStorage = &storage;

        storage_obj.save_raw("tree", "{\"v\":1}").expect("save");
        storage_obj.save_raw("tree", "{\"v\":2}").expect("overwrite");
        assert_eq!(
            storage_obj.load_raw("tree").expect("load"),
            Some("{\"v\":2}".to_string())
        );
        assert_eq!(storage.len(), 1);

        storage_obj.delete_raw("tree").expect("delete");
        assert_eq!(storage_obj.load_raw("tree").expect("load"), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemorySnapshotStorage::with_entry("tree", "[]");
        let clone = storage.clone();
        clone.save_raw("other", "{}").expect("save");
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("tree").as_deref(), Some("[]"));
    }

    #[test]
    fn noop_storage_is_always_empty() {
        let storage = NoopSnapshotStorage;
        storage.save_raw("k", "{}").expect("save");
        assert_eq!(storage.load_raw("k").expect("load"), None);
        storage.delete_raw("k").expect("delete");
    }
}
