//! Write-through persistence of the whole tree under a single storage key.

use std::{fmt, rc::Rc};

use platform_host::SnapshotStorage;

use crate::{
    error::StoreError,
    model::Folder,
    snapshot::{decode_tree, encode_tree, RestoredTree},
};

/// Storage key holding the serialized tree.
pub const TREE_SNAPSHOT_KEY: &str = "data-storage-state-v1";

#[derive(Clone)]
/// Binds a [`SnapshotStorage`] backend to the key the tree is stored under.
pub struct TreePersistence {
    storage: Rc<dyn SnapshotStorage>,
    key: String,
}

impl fmt::Debug for TreePersistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreePersistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl TreePersistence {
    /// Persists under [`TREE_SNAPSHOT_KEY`].
    pub fn new(storage: Rc<dyn SnapshotStorage>) -> Self {
        Self::with_key(storage, TREE_SNAPSHOT_KEY)
    }

    /// Persists under a custom key.
    pub fn with_key(storage: Rc<dyn SnapshotStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and decodes the stored tree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the read fails and [`StoreError::Decode`] when the
    /// stored text is not a valid tree.
    pub fn try_load(&self, now_ms: u64) -> Result<Option<RestoredTree>, StoreError> {
        let Some(raw) = self
            .storage
            .load_raw(&self.key)
            .map_err(StoreError::Storage)?
        else {
            return Ok(None);
        };
        decode_tree(&raw, now_ms).map(Some)
    }

    /// Like [`TreePersistence::try_load`], but logs failures and reports them as "no snapshot".
    pub fn load(&self, now_ms: u64) -> Option<RestoredTree> {
        match self.try_load(now_ms) {
            Ok(restored) => restored,
            Err(err) => {
                leptos::logging::warn!("explorer tree load failed: {err}");
                None
            }
        }
    }

    /// Encodes and writes the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Storage`].
    pub fn save(&self, root: &Folder) -> Result<(), StoreError> {
        let raw = encode_tree(root)?;
        self.storage
            .save_raw(&self.key, &raw)
            .map_err(StoreError::Storage)
    }

    /// Removes the stored tree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the backend rejects the delete.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage
            .delete_raw(&self.key)
            .map_err(StoreError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySnapshotStorage;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FolderId;

    struct FailingStorage;

    impl SnapshotStorage for FailingStorage {
        fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }

        fn delete_raw(&self, _key: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }
    }

    #[test]
    fn save_then_load_uses_the_default_key() {
        let storage = MemorySnapshotStorage::default();
        let persistence = TreePersistence::new(Rc::new(storage.clone()));
        let root = Folder::new(FolderId::new(1), "root");

        persistence.save(&root).expect("save");
        assert!(storage.get(TREE_SNAPSHOT_KEY).is_some());

        let restored = persistence.load(0).expect("restored");
        assert_eq!(restored.root, root);
        assert_eq!(restored.ids.peek_folder(), FolderId::new(2));

        persistence.clear().expect("clear");
        assert!(storage.is_empty());
    }

    #[test]
    fn corrupt_snapshot_loads_as_missing() {
        let storage = MemorySnapshotStorage::with_entry(TREE_SNAPSHOT_KEY, "{not json");
        let persistence = TreePersistence::new(Rc::new(storage));
        assert!(matches!(persistence.try_load(0), Err(StoreError::Decode(_))));
        assert_eq!(persistence.load(0), None);
    }

    #[test]
    fn backend_failures_surface_as_storage_errors() {
        let persistence = TreePersistence::with_key(Rc::new(FailingStorage), "custom");
        assert_eq!(persistence.key(), "custom");
        assert_eq!(
            persistence.save(&Folder::new(FolderId::new(1), "root")),
            Err(StoreError::Storage("quota exceeded".to_string()))
        );
        assert_eq!(persistence.load(0), None);
    }
}
