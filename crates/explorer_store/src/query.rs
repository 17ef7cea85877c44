//! Read-only lookups over a folder subtree.

use crate::model::{EntryKind, EntryRef, FileEntry, FileId, Folder, FolderId};

const ROOT_PATH: &str = "/root";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One search result.
pub struct SearchHit<'a> {
    /// Matched entry.
    pub item: EntryRef<'a>,
    /// Path of the folder being visited when the match was found.
    ///
    /// A matching folder reports its own path; a matching file reports its parent's path.
    pub path: String,
}

impl SearchHit<'_> {
    /// Kind of the matched entry.
    pub fn kind(&self) -> EntryKind {
        self.item.kind()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Number of entries in a subtree.
pub struct TreeCounts {
    /// Folders, including the subtree root.
    pub folders: usize,
    /// Files at any depth.
    pub files: usize,
}

impl Folder {
    /// Finds a folder by id, including `self`.
    pub fn find_folder(&self, id: FolderId) -> Option<&Folder> {
        if self.id == id {
            return Some(self);
        }
        self.folders.iter().find_map(|child| child.find_folder(id))
    }

    /// Mutable variant of [`Folder::find_folder`].
    pub fn find_folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        if self.id == id {
            return Some(self);
        }
        self.folders
            .iter_mut()
            .find_map(|child| child.find_folder_mut(id))
    }

    /// Finds a file and the folder that holds it.
    pub fn find_file(&self, id: FileId) -> Option<(&FileEntry, &Folder)> {
        if let Some(file) = self.files.iter().find(|file| file.id == id) {
            return Some((file, self));
        }
        self.folders.iter().find_map(|child| child.find_file(id))
    }

    pub(crate) fn find_file_mut(&mut self, id: FileId) -> Option<&mut FileEntry> {
        if let Some(idx) = self.files.iter().position(|file| file.id == id) {
            return self.files.get_mut(idx);
        }
        self.folders
            .iter_mut()
            .find_map(|child| child.find_file_mut(id))
    }

    /// Returns the folder directly containing `id`. `None` for `self` and unknown ids.
    pub fn parent_of(&self, id: FolderId) -> Option<&Folder> {
        if self.folders.iter().any(|child| child.id == id) {
            return Some(self);
        }
        self.folders.iter().find_map(|child| child.parent_of(id))
    }

    pub(crate) fn parent_of_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        if self.folders.iter().any(|child| child.id == id) {
            return Some(self);
        }
        self.folders
            .iter_mut()
            .find_map(|child| child.parent_of_mut(id))
    }

    pub(crate) fn folder_holding_file_mut(&mut self, id: FileId) -> Option<&mut Folder> {
        if self.files.iter().any(|file| file.id == id) {
            return Some(self);
        }
        self.folders
            .iter_mut()
            .find_map(|child| child.folder_holding_file_mut(id))
    }

    /// Folders from `self` down to `id`, inclusive.
    pub fn ancestry(&self, id: FolderId) -> Option<Vec<&Folder>> {
        if self.id == id {
            return Some(vec![self]);
        }
        self.folders.iter().find_map(|child| {
            child.ancestry(id).map(|mut chain| {
                chain.insert(0, self);
                chain
            })
        })
    }

    /// Slash-joined names from `self` to `id`, with a leading `/`.
    ///
    /// Unknown ids resolve to `/root`.
    pub fn path_of(&self, id: FolderId) -> String {
        match self.ancestry(id) {
            Some(chain) => chain
                .iter()
                .fold(String::new(), |mut path, folder| {
                    path.push('/');
                    path.push_str(&folder.name);
                    path
                }),
            None => ROOT_PATH.to_string(),
        }
    }

    /// Path of the folder holding `id` followed by the file name.
    pub fn file_path(&self, id: FileId) -> Option<String> {
        let (file, parent) = self.find_file(id)?;
        Some(format!("{}/{}", self.path_of(parent.id), file.name))
    }

    /// Case-insensitive name search over the subtree.
    ///
    /// Results come in depth-first pre-order: a folder, then its files, then its child folders.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        self.collect_hits(&needle, ROOT_PATH.to_string(), &mut hits);
        hits
    }

    fn collect_hits<'a>(&'a self, needle: &str, path: String, hits: &mut Vec<SearchHit<'a>>) {
        if self.name.to_lowercase().contains(needle) {
            hits.push(SearchHit {
                item: EntryRef::Folder(self),
                path: path.clone(),
            });
        }
        for file in &self.files {
            if file.name.to_lowercase().contains(needle) {
                hits.push(SearchHit {
                    item: EntryRef::File(file),
                    path: path.clone(),
                });
            }
        }
        for child in &self.folders {
            child.collect_hits(needle, format!("{path}/{}", child.name), hits);
        }
    }

    /// Counts folders and files in the subtree.
    pub fn counts(&self) -> TreeCounts {
        self.folders.iter().fold(
            TreeCounts {
                folders: 1,
                files: self.files.len(),
            },
            |acc, child| {
                let child = child.counts();
                TreeCounts {
                    folders: acc.folders + child.folders,
                    files: acc.files + child.files,
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::NewFile;

    fn file(id: u64, name: &str) -> FileEntry {
        NewFile::named(name).into_entry(FileId::new(id), name.to_string(), 0)
    }

    fn sample() -> Folder {
        let mut root = Folder::new(FolderId::new(1), "root");
        let mut docs = Folder::new(FolderId::new(2), "Docs");
        docs.files.push(file(1, "Readme.txt"));
        let mut nested = Folder::new(FolderId::new(3), "readme-notes");
        nested.files.push(file(2, "draft.md"));
        docs.folders.push(nested);
        root.folders.push(docs);
        root.folders.push(Folder::new(FolderId::new(4), "Music"));
        root.files.push(file(3, "top.txt"));
        root
    }

    #[test]
    fn lookups_walk_the_whole_tree() {
        let root = sample();
        assert_eq!(
            root.find_folder(FolderId::new(3)).map(|f| f.name.as_str()),
            Some("readme-notes")
        );
        assert!(root.find_folder(FolderId::new(99)).is_none());

        let (found, parent) = root.find_file(FileId::new(2)).expect("file");
        assert_eq!(found.name, "draft.md");
        assert_eq!(parent.id, FolderId::new(3));

        assert_eq!(
            root.parent_of(FolderId::new(3)).map(|f| f.id),
            Some(FolderId::new(2))
        );
        assert!(root.parent_of(FolderId::new(1)).is_none());
    }

    #[test]
    fn paths_start_at_root_and_fall_back_for_unknown_ids() {
        let root = sample();
        assert_eq!(root.path_of(FolderId::new(1)), "/root");
        assert_eq!(root.path_of(FolderId::new(3)), "/root/Docs/readme-notes");
        assert_eq!(root.path_of(FolderId::new(42)), "/root");
        assert_eq!(
            root.file_path(FileId::new(2)).as_deref(),
            Some("/root/Docs/readme-notes/draft.md")
        );
        assert_eq!(root.file_path(FileId::new(42)), None);
    }

    #[test]
    fn search_is_case_insensitive_and_pre_ordered() {
        let root = sample();
        let hits: Vec<(EntryKind, String, String)> = root
            .search("  README ")
            .into_iter()
            .map(|hit| (hit.kind(), hit.item.name().to_string(), hit.path))
            .collect();

        assert_eq!(
            hits,
            vec![
                (EntryKind::File, "Readme.txt".to_string(), "/root/Docs".to_string()),
                (
                    EntryKind::Folder,
                    "readme-notes".to_string(),
                    "/root/Docs/readme-notes".to_string()
                ),
            ]
        );
    }

    #[test]
    fn blank_query_finds_nothing() {
        assert!(sample().search("   ").is_empty());
    }

    #[test]
    fn root_matches_with_its_own_path() {
        let root = sample();
        let hits = root.search("roo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "/root");
        assert_eq!(hits[0].kind(), EntryKind::Folder);
    }

    #[test]
    fn counts_include_subtree_root() {
        assert_eq!(
            sample().counts(),
            TreeCounts {
                folders: 4,
                files: 3
            }
        );
    }
}
