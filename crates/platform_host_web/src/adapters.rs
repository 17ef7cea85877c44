//! Compile-time storage strategy selection.

use std::rc::Rc;

use platform_host::{MemorySnapshotStorage, SnapshotStorage};

use crate::LocalSnapshotStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Storage strategy chosen for the active build.
pub enum StorageStrategy {
    /// Snapshots survive reloads through `window.localStorage`.
    Browser,
    /// Snapshots live only as long as the page (`ephemeral-storage` feature).
    Ephemeral,
}

/// Returns the compile-time selected storage strategy.
pub const fn selected_storage_strategy() -> StorageStrategy {
    #[cfg(feature = "ephemeral-storage")]
    {
        StorageStrategy::Ephemeral
    }

    #[cfg(not(feature = "ephemeral-storage"))]
    {
        StorageStrategy::Browser
    }
}

/// Returns the selected strategy as a stable string token.
pub fn storage_strategy_name() -> &'static str {
    match selected_storage_strategy() {
        StorageStrategy::Browser => "browser",
        StorageStrategy::Ephemeral => "ephemeral",
    }
}

/// Builds the snapshot storage backend for the selected strategy.
pub fn snapshot_storage() -> Rc<dyn SnapshotStorage> {
    match selected_storage_strategy() {
        StorageStrategy::Browser => Rc::new(LocalSnapshotStorage),
        StorageStrategy::Ephemeral => Rc::new(MemorySnapshotStorage::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = if cfg!(feature = "ephemeral-storage") {
            "ephemeral"
        } else {
            "browser"
        };
        assert_eq!(storage_strategy_name(), expected);
    }

    #[test]
    fn snapshot_storage_accepts_writes() {
        let storage = snapshot_storage();
        storage.save_raw("adapter-check", "{}").expect("save");
    }
}
