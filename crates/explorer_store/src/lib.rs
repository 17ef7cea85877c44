//! In-memory virtual file tree with observers, search, and whole-tree JSON persistence.
//!
//! [`TreeStore`] owns a single root [`Folder`]. Folders own their child folders and files, so
//! removing a folder drops its entire subtree. Every successful mutation is written through the
//! optional [`TreePersistence`] adapter and then broadcast synchronously to subscribers as a
//! [`TreeChange`] together with the current root.
//!
//! Read-only queries live on [`Folder`] itself so UI layers can run them against a cloned
//! snapshot without holding the store.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod demo;
mod error;
pub mod format;
pub mod model;
pub mod persistence;
mod query;
pub mod snapshot;
mod store;

pub use error::StoreError;
pub use format::{format_file_size, PreviewKind};
pub use model::{
    EntryKind, EntryRef, FileEntry, FileId, Folder, FolderId, NewFile, ParseIdError,
    DEFAULT_FILE_DESCRIPTION, DEFAULT_FOLDER_NAME, ROOT_FOLDER_NAME,
};
pub use persistence::{TreePersistence, TREE_SNAPSHOT_KEY};
pub use query::{SearchHit, TreeCounts};
pub use snapshot::{decode_tree, encode_tree, IdAllocator, RestoredTree};
pub use store::{ChildLoad, SubscriptionId, TreeChange, TreeStore};
