//! Browser (`wasm32`) implementations of [`platform_host`] contracts.
//!
//! - [`LocalSnapshotStorage`]: `window.localStorage` snapshot persistence
//! - [`WebFileTransferService`]: file picker uploads and anchor-driven downloads
//! - [`adapters`]: compile-time storage strategy selection
//!
//! On non-wasm targets every adapter degrades to an inert fallback so the workspace can be
//! built and unit-tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod storage;
pub mod transfer;

pub use adapters::{
    selected_storage_strategy, snapshot_storage, storage_strategy_name, StorageStrategy,
};
pub use storage::LocalSnapshotStorage;
pub use transfer::WebFileTransferService;
