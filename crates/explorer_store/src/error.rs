use thiserror::Error;

use crate::model::{EntryKind, FileId, FolderId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by [`crate::TreeStore`] operations and the snapshot codec.
pub enum StoreError {
    /// No folder with this id exists in the tree.
    #[error("folder `{0}` not found")]
    FolderNotFound(FolderId),
    /// No file with this id exists in the tree.
    #[error("file `{0}` not found")]
    FileNotFound(FileId),
    /// The root folder cannot be removed.
    #[error("the root folder cannot be deleted")]
    RootFolder,
    /// Folder and file names must contain something other than whitespace.
    #[error("name must not be empty")]
    EmptyName,
    /// The tree could not be serialized.
    #[error("snapshot encode failed: {0}")]
    Encode(String),
    /// A stored snapshot could not be parsed.
    #[error("snapshot decode failed: {0}")]
    Decode(String),
    /// The id counter for this kind has reached its ceiling.
    #[error("no {} ids left", .0.as_str())]
    IdsExhausted(EntryKind),
    /// The storage backend rejected a read or write.
    #[error("snapshot storage failed: {0}")]
    Storage(String),
}
