//! Runtime settings for one explorer instance.

use std::time::Duration;

use explorer_store::TREE_SNAPSHOT_KEY;
use serde::{Deserialize, Serialize};

/// Search input settle time before results refresh.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Artificial latency on the first expansion of a folder.
pub const DEFAULT_LAZY_LOAD_DELAY_MS: u64 = 250;
/// Delay before a tooltip hides once the pointer leaves it.
pub const DEFAULT_TOOLTIP_HIDE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Explorer settings. Missing fields deserialize to their defaults.
pub struct ExplorerConfig {
    /// Storage key for the serialized tree.
    pub storage_key: String,
    /// Write the tree through to storage after every change.
    pub persist: bool,
    /// Fill an empty first session with sample folders and files.
    pub seed_demo_data: bool,
    /// See [`DEFAULT_SEARCH_DEBOUNCE_MS`].
    pub search_debounce_ms: u64,
    /// See [`DEFAULT_LAZY_LOAD_DELAY_MS`].
    pub lazy_load_delay_ms: u64,
    /// See [`DEFAULT_TOOLTIP_HIDE_MS`].
    pub tooltip_hide_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            storage_key: TREE_SNAPSHOT_KEY.to_string(),
            persist: true,
            seed_demo_data: true,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            lazy_load_delay_ms: DEFAULT_LAZY_LOAD_DELAY_MS,
            tooltip_hide_ms: DEFAULT_TOOLTIP_HIDE_MS,
        }
    }
}

impl ExplorerConfig {
    /// Search debounce as a [`Duration`].
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Lazy-load delay as a [`Duration`].
    pub fn lazy_load_delay(&self) -> Duration {
        Duration::from_millis(self.lazy_load_delay_ms)
    }

    /// Tooltip hide delay as a [`Duration`].
    pub fn tooltip_hide_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_ms)
    }
}
