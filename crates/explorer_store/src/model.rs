//! Folder and file node types.

use std::{fmt, str::FromStr};

/// Display name given to the root folder.
pub const ROOT_FOLDER_NAME: &str = "root";
/// Name used when a folder is created without one.
pub const DEFAULT_FOLDER_NAME: &str = "New folder";
/// Description used when a file is created without one.
pub const DEFAULT_FILE_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, PartialEq, Eq)]
/// An id string that does not follow the `<kind>_<n>` pattern.
pub struct ParseIdError(pub String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid entry id `{}`", self.0)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! entry_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Text prefix used in the rendered id.
            pub const PREFIX: &'static str = $prefix;

            /// Wraps a raw counter value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw counter value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", Self::PREFIX, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.strip_prefix(Self::PREFIX)
                    .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse::<u64>().ok())
                    .map(Self)
                    .ok_or_else(|| ParseIdError(raw.to_string()))
            }
        }
    };
}

entry_id!(
    /// Folder identifier, rendered as `folder_<n>`.
    FolderId,
    "folder_"
);
entry_id!(
    /// File identifier, rendered as `file_<n>`.
    FileId,
    "file_"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of tree entry.
pub enum EntryKind {
    /// A folder node.
    Folder,
    /// A file leaf.
    File,
}

impl EntryKind {
    /// Stable lowercase token (`folder` / `file`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }

    /// Short badge text shown next to entries.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Folder => "DIR",
            Self::File => "FILE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A folder and everything below it.
pub struct Folder {
    /// Folder id.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Child folders in insertion order.
    pub folders: Vec<Folder>,
    /// Files directly inside this folder, in insertion order.
    pub files: Vec<FileEntry>,
    /// Set once the folder has been expanded at least once.
    pub loaded: bool,
}

impl Folder {
    /// Creates an empty, not-yet-loaded folder.
    pub fn new(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            folders: Vec::new(),
            files: Vec::new(),
            loaded: false,
        }
    }

    /// Returns `true` when the folder has neither child folders nor files.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file stored in the tree.
pub struct FileEntry {
    /// File id.
    pub id: FileId,
    /// Display name, including extension.
    pub name: String,
    /// MIME-like type string (may be empty).
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Text, `data:` URL, `blob:` URL, or nothing.
    pub content: Option<String>,
    /// Human readable description shown in tooltips and search results.
    pub description: String,
    /// Creation time in unix milliseconds.
    pub created_at_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Input for [`crate::TreeStore::add_file`].
pub struct NewFile {
    /// Display name.
    pub name: String,
    /// MIME-like type string.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Stored content.
    pub content: Option<String>,
    /// Description; [`DEFAULT_FILE_DESCRIPTION`] when `None`.
    pub description: Option<String>,
}

impl NewFile {
    /// Starts a file description with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the MIME type.
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Sets the byte size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn into_entry(self, id: FileId, name: String, created_at_ms: u64) -> FileEntry {
        FileEntry {
            id,
            name,
            mime_type: self.mime_type,
            size: self.size,
            content: self.content,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_FILE_DESCRIPTION.to_string()),
            created_at_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Borrowed view of either kind of entry.
pub enum EntryRef<'a> {
    /// A folder.
    Folder(&'a Folder),
    /// A file.
    File(&'a FileEntry),
}

impl<'a> EntryRef<'a> {
    /// Entry kind.
    pub fn kind(self) -> EntryKind {
        match self {
            Self::Folder(_) => EntryKind::Folder,
            Self::File(_) => EntryKind::File,
        }
    }

    /// Display name.
    pub fn name(self) -> &'a str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    /// File description; folders have none.
    pub fn description(self) -> &'a str {
        match self {
            Self::Folder(_) => "",
            Self::File(file) => &file.description,
        }
    }

    /// Rendered id (`folder_<n>` / `file_<n>`).
    pub fn id_string(self) -> String {
        match self {
            Self::Folder(folder) => folder.id.to_string(),
            Self::File(file) => file.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_render_and_parse_with_kind_prefix() {
        assert_eq!(FolderId::new(7).to_string(), "folder_7");
        assert_eq!(FileId::new(12).to_string(), "file_12");
        assert_eq!("folder_42".parse::<FolderId>(), Ok(FolderId::new(42)));
        assert_eq!("file_3".parse::<FileId>(), Ok(FileId::new(3)));
    }

    #[test]
    fn ids_reject_foreign_or_malformed_text() {
        for raw in ["file_3", "folder_", "folder_-1", "folder_1a", "x_folder_2", "folder-1707"] {
            assert!(raw.parse::<FolderId>().is_err(), "raw={raw:?}");
        }
        assert!("folder_3".parse::<FileId>().is_err());
    }

    #[test]
    fn new_file_fills_default_description() {
        let entry = NewFile::named("a.txt")
            .with_type("text/plain")
            .with_size(3)
            .with_content("abc")
            .into_entry(FileId::new(1), "a.txt".to_string(), 99);
        assert_eq!(entry.description, DEFAULT_FILE_DESCRIPTION);
        assert_eq!(entry.content.as_deref(), Some("abc"));
        assert_eq!(entry.created_at_ms, 99);
    }

    #[test]
    fn entry_ref_exposes_kind_specific_fields() {
        let folder = Folder::new(FolderId::new(1), "docs");
        let file = NewFile::named("a.txt")
            .with_description("alpha")
            .into_entry(FileId::new(2), "a.txt".to_string(), 0);

        assert_eq!(EntryRef::Folder(&folder).kind(), EntryKind::Folder);
        assert_eq!(EntryRef::Folder(&folder).description(), "");
        assert_eq!(EntryRef::File(&file).description(), "alpha");
        assert_eq!(EntryRef::File(&file).id_string(), "file_2");
        assert_eq!(EntryKind::File.badge(), "FILE");
    }
}
