//! Whole-tree JSON codec and id counter reconstruction.
//!
//! The wire shape is one nested object per folder:
//!
//! ```json
//! { "id": "folder_1", "name": "root", "loaded": true,
//!   "folders": [ ... ],
//!   "files": [ { "id": "file_1", "name": "a.txt", "type": "text/plain", "size": 3,
//!                "content": "abc", "description": "No description", "createdAt": 0 } ] }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::StoreError,
    model::{
        EntryKind, FileEntry, FileId, Folder, FolderId, DEFAULT_FILE_DESCRIPTION,
        DEFAULT_FOLDER_NAME,
    },
};

/// Largest id number a counter will issue or a snapshot may keep.
const MAX_ID: u64 = u64::MAX - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-kind id counters.
pub struct IdAllocator {
    next_folder: u64,
    next_file: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Counters for an empty tree; the first ids are `folder_1` and `file_1`.
    pub const fn new() -> Self {
        Self {
            next_folder: 1,
            next_file: 1,
        }
    }

    /// Counters that continue after the given maxima.
    ///
    /// A maximum at or past the ceiling leaves that counter exhausted.
    pub const fn after(max_folder: u64, max_file: u64) -> Self {
        Self {
            next_folder: max_folder.saturating_add(1),
            next_file: max_file.saturating_add(1),
        }
    }

    /// Issues the next folder id.
    ///
    /// # Errors
    ///
    /// [`StoreError::IdsExhausted`] once `folder_18446744073709551614` has been issued.
    pub fn next_folder_id(&mut self) -> Result<FolderId, StoreError> {
        let id = issue(&mut self.next_folder, EntryKind::Folder)?;
        Ok(FolderId::new(id))
    }

    /// Issues the next file id.
    ///
    /// # Errors
    ///
    /// [`StoreError::IdsExhausted`] once `file_18446744073709551614` has been issued.
    pub fn next_file_id(&mut self) -> Result<FileId, StoreError> {
        let id = issue(&mut self.next_file, EntryKind::File)?;
        Ok(FileId::new(id))
    }

    /// Id the next [`IdAllocator::next_folder_id`] call will return.
    pub fn peek_folder(&self) -> FolderId {
        FolderId::new(self.next_folder)
    }

    /// Id the next [`IdAllocator::next_file_id`] call will return.
    pub fn peek_file(&self) -> FileId {
        FileId::new(self.next_file)
    }
}

fn issue(next: &mut u64, kind: EntryKind) -> Result<u64, StoreError> {
    let id = *next;
    *next = id.checked_add(1).ok_or(StoreError::IdsExhausted(kind))?;
    Ok(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A decoded tree with counters positioned after its largest ids.
pub struct RestoredTree {
    /// Decoded root folder.
    pub root: Folder,
    /// Counters for new entries.
    pub ids: IdAllocator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FolderRecord {
    id: String,
    #[serde(default = "default_folder_name")]
    name: String,
    #[serde(default)]
    loaded: bool,
    #[serde(default)]
    folders: Vec<FolderRecord>,
    #[serde(default)]
    files: Vec<FileRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileRecord {
    id: String,
    name: String,
    #[serde(rename = "type", default)]
    mime_type: String,
    #[serde(default)]
    size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default = "default_description")]
    description: String,
    #[serde(rename = "createdAt", default)]
    created_at: Option<u64>,
}

fn default_folder_name() -> String {
    DEFAULT_FOLDER_NAME.to_string()
}

fn default_description() -> String {
    DEFAULT_FILE_DESCRIPTION.to_string()
}

impl From<&Folder> for FolderRecord {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            loaded: folder.loaded,
            folders: folder.folders.iter().map(Self::from).collect(),
            files: folder.files.iter().map(FileRecord::from).collect(),
        }
    }
}

impl From<&FileEntry> for FileRecord {
    fn from(file: &FileEntry) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size,
            content: file.content.clone(),
            description: file.description.clone(),
            created_at: Some(file.created_at_ms),
        }
    }
}

/// Serializes the whole tree to JSON.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] when serialization fails.
pub fn encode_tree(root: &Folder) -> Result<String, StoreError> {
    serde_json::to_string(&FolderRecord::from(root)).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parses a JSON tree and positions the id counters after the largest ids found.
///
/// Files without `createdAt` are stamped with `now_ms`. Ids that are malformed, past the counter
/// ceiling, or already used by an earlier entry of the same kind are re-issued after the maximum.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when the text is not a folder object and
/// [`StoreError::IdsExhausted`] when an id has to be re-issued but none is left.
pub fn decode_tree(raw: &str, now_ms: u64) -> Result<RestoredTree, StoreError> {
    let record: FolderRecord =
        serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))?;

    let mut maxima = (0, 0);
    scan_maxima(&record, &mut maxima);

    let mut rebuild = Rebuild {
        ids: IdAllocator::after(maxima.0, maxima.1),
        seen_folders: HashSet::new(),
        seen_files: HashSet::new(),
        now_ms,
    };
    let root = rebuild.folder(record)?;
    Ok(RestoredTree {
        root,
        ids: rebuild.ids,
    })
}

fn folder_id(raw: &str) -> Option<FolderId> {
    raw.parse::<FolderId>().ok().filter(|id| id.get() <= MAX_ID)
}

fn file_id(raw: &str) -> Option<FileId> {
    raw.parse::<FileId>().ok().filter(|id| id.get() <= MAX_ID)
}

fn scan_maxima(record: &FolderRecord, maxima: &mut (u64, u64)) {
    if let Some(id) = folder_id(&record.id) {
        maxima.0 = maxima.0.max(id.get());
    }
    for file in &record.files {
        if let Some(id) = file_id(&file.id) {
            maxima.1 = maxima.1.max(id.get());
        }
    }
    for child in &record.folders {
        scan_maxima(child, maxima);
    }
}

struct Rebuild {
    ids: IdAllocator,
    seen_folders: HashSet<FolderId>,
    seen_files: HashSet<FileId>,
    now_ms: u64,
}

impl Rebuild {
    fn folder(&mut self, record: FolderRecord) -> Result<Folder, StoreError> {
        let id = match folder_id(&record.id) {
            Some(id) if self.seen_folders.insert(id) => id,
            _ => {
                let id = self.ids.next_folder_id()?;
                self.seen_folders.insert(id);
                id
            }
        };
        let files = record
            .files
            .into_iter()
            .map(|file| self.file(file))
            .collect::<Result<_, _>>()?;
        let folders = record
            .folders
            .into_iter()
            .map(|child| self.folder(child))
            .collect::<Result<_, _>>()?;
        Ok(Folder {
            id,
            name: record.name,
            folders,
            files,
            loaded: record.loaded,
        })
    }

    fn file(&mut self, record: FileRecord) -> Result<FileEntry, StoreError> {
        let id = match file_id(&record.id) {
            Some(id) if self.seen_files.insert(id) => id,
            _ => {
                let id = self.ids.next_file_id()?;
                self.seen_files.insert(id);
                id
            }
        };
        Ok(FileEntry {
            id,
            name: record.name,
            mime_type: record.mime_type,
            size: record.size,
            content: record.content,
            description: record.description,
            created_at_ms: record.created_at.unwrap_or(self.now_ms),
        })
    }
}
