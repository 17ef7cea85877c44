//! The mutable tree, its id counters, and change subscribers.

use std::{fmt, rc::Rc};

use platform_host::{Clock, SystemClock};

use crate::{
    demo,
    error::StoreError,
    model::{FileEntry, FileId, Folder, FolderId, NewFile, ROOT_FOLDER_NAME},
    persistence::TreePersistence,
    query::{SearchHit, TreeCounts},
    snapshot::IdAllocator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle returned by [`TreeStore::subscribe`].
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a successful mutation changed.
pub enum TreeChange {
    /// A folder was appended to `parent`.
    FolderCreated {
        /// New folder.
        id: FolderId,
        /// Folder it was created in.
        parent: FolderId,
    },
    /// A folder name changed.
    FolderRenamed {
        /// Renamed folder.
        id: FolderId,
    },
    /// A folder and its subtree were removed.
    FolderDeleted {
        /// Removed folder.
        id: FolderId,
        /// Folder it was removed from.
        parent: FolderId,
    },
    /// A file was appended to `folder`.
    FileAdded {
        /// New file.
        id: FileId,
        /// Folder holding it.
        folder: FolderId,
    },
    /// A file name changed.
    FileRenamed {
        /// Renamed file.
        id: FileId,
    },
    /// A file's content and size were replaced.
    FileContentUpdated {
        /// Edited file.
        id: FileId,
    },
    /// A file was removed.
    FileDeleted {
        /// Removed file.
        id: FileId,
        /// Folder it was removed from.
        folder: FolderId,
    },
    /// A folder was expanded for the first time.
    ChildrenLoaded {
        /// Folder now marked loaded.
        id: FolderId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`TreeStore::load_children`].
pub struct ChildLoad {
    /// `true` when the folder had never been loaded before this call.
    pub first_load: bool,
    /// Child folder ids in display order.
    pub folders: Vec<FolderId>,
    /// Child file ids in display order.
    pub files: Vec<FileId>,
}

type Listener = Box<dyn Fn(&TreeChange, &Folder)>;

/// Owner of the virtual file tree.
pub struct TreeStore {
    root: Folder,
    ids: IdAllocator,
    clock: Rc<dyn Clock>,
    persistence: Option<TreePersistence>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for TreeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeStore")
            .field("root", &self.root)
            .field("ids", &self.ids)
            .field("persistence", &self.persistence)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// An empty tree holding only the loaded root folder.
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    /// Like [`TreeStore::new`] with an explicit clock for creation timestamps.
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        let mut root = Folder::new(FolderId::new(1), ROOT_FOLDER_NAME);
        root.loaded = true;
        Self {
            root,
            ids: IdAllocator::after(1, 0),
            clock,
            persistence: None,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Restores the tree from `persistence`, falling back to an empty or demo tree.
    ///
    /// The adapter stays attached, so every later mutation is written through.
    pub fn open(persistence: TreePersistence, seed_demo: bool) -> Self {
        Self::open_with_clock(persistence, seed_demo, Rc::new(SystemClock))
    }

    /// Like [`TreeStore::open`] with an explicit clock.
    pub fn open_with_clock(
        persistence: TreePersistence,
        seed_demo: bool,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let restored = persistence.load(clock.now_ms());
        let mut store = Self::with_clock(clock);
        match restored {
            Some(restored) => {
                store.root = restored.root;
                store.ids = restored.ids;
            }
            None if seed_demo => store.seed_demo_data(),
            None => {}
        }
        store.persistence = Some(persistence);
        store
    }

    fn seed_demo_data(&mut self) {
        let now_ms = self.clock.now_ms();
        if let Err(err) = demo::seed(&mut self.root, &mut self.ids, now_ms) {
            leptos::logging::warn!("explorer demo seed failed: {err}");
        }
    }

    /// Current root folder.
    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Id of the root folder.
    pub fn root_id(&self) -> FolderId {
        self.root.id
    }

    /// Registers a listener called after every successful mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&TreeChange, &Folder) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Creates a folder under `parent` (the root when `None`).
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyName`], [`StoreError::FolderNotFound`], or
    /// [`StoreError::IdsExhausted`].
    pub fn create_folder(
        &mut self,
        parent: Option<FolderId>,
        name: &str,
    ) -> Result<FolderId, StoreError> {
        let name = normalize_name(name)?;
        let parent_id = parent.unwrap_or(self.root.id);
        let parent = self
            .root
            .find_folder_mut(parent_id)
            .ok_or(StoreError::FolderNotFound(parent_id))?;
        let id = self.ids.next_folder_id()?;
        parent.folders.push(Folder::new(id, name));
        self.commit(TreeChange::FolderCreated {
            id,
            parent: parent_id,
        });
        Ok(id)
    }

    /// Renames a folder, the root included.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyName`] or [`StoreError::FolderNotFound`].
    pub fn rename_folder(&mut self, id: FolderId, name: &str) -> Result<(), StoreError> {
        let name = normalize_name(name)?;
        let folder = self
            .root
            .find_folder_mut(id)
            .ok_or(StoreError::FolderNotFound(id))?;
        folder.name = name;
        self.commit(TreeChange::FolderRenamed { id });
        Ok(())
    }

    /// Removes a folder with everything below it.
    ///
    /// # Errors
    ///
    /// [`StoreError::RootFolder`] or [`StoreError::FolderNotFound`].
    pub fn delete_folder(&mut self, id: FolderId) -> Result<(), StoreError> {
        if id == self.root.id {
            return Err(StoreError::RootFolder);
        }
        let parent = self
            .root
            .parent_of_mut(id)
            .ok_or(StoreError::FolderNotFound(id))?;
        parent.folders.retain(|child| child.id != id);
        let parent = parent.id;
        self.commit(TreeChange::FolderDeleted { id, parent });
        Ok(())
    }

    /// Appends a file to `folder` (the root when `None`), stamped with the current time.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyName`], [`StoreError::FolderNotFound`], or
    /// [`StoreError::IdsExhausted`].
    pub fn add_file(&mut self, folder: Option<FolderId>, file: NewFile) -> Result<FileId, StoreError> {
        let name = normalize_name(&file.name)?;
        let folder_id = folder.unwrap_or(self.root.id);
        let created_at_ms = self.clock.now_ms();
        let target = self
            .root
            .find_folder_mut(folder_id)
            .ok_or(StoreError::FolderNotFound(folder_id))?;
        let id = self.ids.next_file_id()?;
        target.files.push(file.into_entry(id, name, created_at_ms));
        self.commit(TreeChange::FileAdded {
            id,
            folder: folder_id,
        });
        Ok(id)
    }

    /// Appends every file in `files` to `folder` (the root when `None`), or none of them.
    ///
    /// The tree is saved once for the batch and listeners see one
    /// [`TreeChange::FileAdded`] per file.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyName`] when any name is blank, [`StoreError::FolderNotFound`], or
    /// [`StoreError::IdsExhausted`]. The tree and counters are untouched on error.
    pub fn add_files(
        &mut self,
        folder: Option<FolderId>,
        files: Vec<NewFile>,
    ) -> Result<Vec<FileId>, StoreError> {
        let folder_id = folder.unwrap_or(self.root.id);
        if self.root.find_folder(folder_id).is_none() {
            return Err(StoreError::FolderNotFound(folder_id));
        }
        let created_at_ms = self.clock.now_ms();
        let mut ids = self.ids;
        let staged = files
            .into_iter()
            .map(|file| {
                let name = normalize_name(&file.name)?;
                Ok(file.into_entry(ids.next_file_id()?, name, created_at_ms))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        let target = self
            .root
            .find_folder_mut(folder_id)
            .ok_or(StoreError::FolderNotFound(folder_id))?;
        let added: Vec<FileId> = staged.iter().map(|file| file.id).collect();
        target.files.extend(staged);
        self.ids = ids;

        self.save();
        for &id in &added {
            self.notify(&TreeChange::FileAdded {
                id,
                folder: folder_id,
            });
        }
        Ok(added)
    }

    /// Renames a file.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyName`] or [`StoreError::FileNotFound`].
    pub fn rename_file(&mut self, id: FileId, name: &str) -> Result<(), StoreError> {
        let name = normalize_name(name)?;
        let file = self
            .root
            .find_file_mut(id)
            .ok_or(StoreError::FileNotFound(id))?;
        file.name = name;
        self.commit(TreeChange::FileRenamed { id });
        Ok(())
    }

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// [`StoreError::FileNotFound`].
    pub fn delete_file(&mut self, id: FileId) -> Result<(), StoreError> {
        let folder = self
            .root
            .folder_holding_file_mut(id)
            .ok_or(StoreError::FileNotFound(id))?;
        folder.files.retain(|file| file.id != id);
        let folder = folder.id;
        self.commit(TreeChange::FileDeleted { id, folder });
        Ok(())
    }

    /// Replaces a file's content; the size becomes the UTF-8 byte length.
    ///
    /// # Errors
    ///
    /// [`StoreError::FileNotFound`].
    pub fn update_file_content(&mut self, id: FileId, content: String) -> Result<(), StoreError> {
        let file = self
            .root
            .find_file_mut(id)
            .ok_or(StoreError::FileNotFound(id))?;
        file.size = content.len() as u64;
        file.content = Some(content);
        self.commit(TreeChange::FileContentUpdated { id });
        Ok(())
    }

    /// Marks a folder loaded and lists its children.
    ///
    /// Only the first call for a folder counts as a change.
    ///
    /// # Errors
    ///
    /// [`StoreError::FolderNotFound`].
    pub fn load_children(&mut self, id: FolderId) -> Result<ChildLoad, StoreError> {
        let folder = self
            .root
            .find_folder_mut(id)
            .ok_or(StoreError::FolderNotFound(id))?;
        let first_load = !folder.loaded;
        folder.loaded = true;
        let load = ChildLoad {
            first_load,
            folders: folder.folders.iter().map(|child| child.id).collect(),
            files: folder.files.iter().map(|file| file.id).collect(),
        };
        if first_load {
            self.commit(TreeChange::ChildrenLoaded { id });
        }
        Ok(load)
    }

    /// See [`Folder::find_folder`].
    pub fn find_folder(&self, id: FolderId) -> Option<&Folder> {
        self.root.find_folder(id)
    }

    /// See [`Folder::find_file`].
    pub fn find_file(&self, id: FileId) -> Option<(&FileEntry, &Folder)> {
        self.root.find_file(id)
    }

    /// See [`Folder::parent_of`].
    pub fn parent_of(&self, id: FolderId) -> Option<&Folder> {
        self.root.parent_of(id)
    }

    /// See [`Folder::path_of`].
    pub fn path_of(&self, id: FolderId) -> String {
        self.root.path_of(id)
    }

    /// See [`Folder::search`].
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.root.search(query)
    }

    /// See [`Folder::counts`].
    pub fn counts(&self) -> TreeCounts {
        self.root.counts()
    }

    fn commit(&self, change: TreeChange) {
        self.save();
        self.notify(&change);
    }

    fn save(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(err) = persistence.save(&self.root) {
                leptos::logging::warn!("explorer tree save failed: {err}");
            }
        }
    }

    fn notify(&self, change: &TreeChange) {
        for (_, listener) in &self.listeners {
            listener(change, &self.root);
        }
    }
}

fn normalize_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use platform_host::{ManualClock, MemorySnapshotStorage};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::EntryKind, persistence::TREE_SNAPSHOT_KEY};

    fn recorded(store: &mut TreeStore) -> Rc<RefCell<Vec<TreeChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |change, _| sink.borrow_mut().push(change.clone()));
        seen
    }

    #[test]
    fn empty_store_has_a_loaded_root() {
        let store = TreeStore::new();
        assert_eq!(store.root().id, FolderId::new(1));
        assert_eq!(store.root().name, ROOT_FOLDER_NAME);
        assert!(store.root().loaded);
        assert!(store.root().is_empty());
    }

    #[test]
    fn create_folder_defaults_to_root_and_trims_names() {
        let mut store = TreeStore::new();
        let seen = recorded(&mut store);

        let docs = store.create_folder(None, "  Docs ").expect("docs");
        let inner = store.create_folder(Some(docs), "Inner").expect("inner");

        assert_eq!(store.path_of(inner), "/root/Docs/Inner");
        assert_eq!(
            *seen.borrow(),
            vec![
                TreeChange::FolderCreated {
                    id: docs,
                    parent: FolderId::new(1)
                },
                TreeChange::FolderCreated {
                    id: inner,
                    parent: docs
                },
            ]
        );
    }

    #[test]
    fn failed_operations_do_not_notify_or_consume_ids() {
        let mut store = TreeStore::new();
        let seen = recorded(&mut store);

        assert_eq!(store.create_folder(None, "   "), Err(StoreError::EmptyName));
        assert_eq!(
            store.create_folder(Some(FolderId::new(77)), "x"),
            Err(StoreError::FolderNotFound(FolderId::new(77)))
        );
        assert_eq!(
            store.rename_file(FileId::new(3), "x"),
            Err(StoreError::FileNotFound(FileId::new(3)))
        );
        assert_eq!(store.delete_folder(store.root_id()), Err(StoreError::RootFolder));
        assert!(seen.borrow().is_empty());

        assert_eq!(store.create_folder(None, "ok"), Ok(FolderId::new(2)));
    }

    #[test]
    fn delete_folder_drops_the_subtree() {
        let mut store = TreeStore::new();
        let a = store.create_folder(None, "a").expect("a");
        let b = store.create_folder(Some(a), "b").expect("b");
        let file = store
            .add_file(Some(b), NewFile::named("deep.txt"))
            .expect("file");

        store.delete_folder(a).expect("delete");

        assert!(store.find_folder(a).is_none());
        assert!(store.find_folder(b).is_none());
        assert!(store.find_file(file).is_none());
        assert_eq!(
            store.counts(),
            TreeCounts {
                folders: 1,
                files: 0
            }
        );
    }

    #[test]
    fn add_rename_edit_and_delete_file() {
        let clock = Rc::new(ManualClock::new(5_000));
        let mut store = TreeStore::with_clock(clock.clone());
        let seen = recorded(&mut store);

        let id = store
            .add_file(None, NewFile::named("note.txt").with_type("text/plain"))
            .expect("add");
        clock.advance(10);
        store.rename_file(id, "renamed.txt").expect("rename");
        store
            .update_file_content(id, "héllo".to_string())
            .expect("edit");

        let (file, parent) = store.find_file(id).expect("file");
        assert_eq!(parent.id, store.root_id());
        assert_eq!(file.name, "renamed.txt");
        assert_eq!(file.size, 6);
        assert_eq!(file.created_at_ms, 5_000);
        assert_eq!(file.description, "No description");

        store.delete_file(id).expect("delete");
        assert!(store.find_file(id).is_none());
        assert_eq!(
            *seen.borrow(),
            vec![
                TreeChange::FileAdded {
                    id,
                    folder: FolderId::new(1)
                },
                TreeChange::FileRenamed { id },
                TreeChange::FileContentUpdated { id },
                TreeChange::FileDeleted {
                    id,
                    folder: FolderId::new(1)
                },
            ]
        );
    }

    #[test]
    fn load_children_reports_first_load_once() {
        let mut store = TreeStore::new();
        let docs = store.create_folder(None, "docs").expect("docs");
        let file = store
            .add_file(Some(docs), NewFile::named("a.txt"))
            .expect("file");
        let seen = recorded(&mut store);

        let first = store.load_children(docs).expect("first");
        let second = store.load_children(docs).expect("second");

        assert!(first.first_load);
        assert!(!second.first_load);
        assert_eq!(first.files, vec![file]);
        assert_eq!(*seen.borrow(), vec![TreeChange::ChildrenLoaded { id: docs }]);
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving_changes() {
        let mut store = TreeStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let sub = store.subscribe(move |_, root| {
            assert_eq!(root.name, ROOT_FOLDER_NAME);
            *counter.borrow_mut() += 1;
        });

        store.create_folder(None, "one").expect("one");
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.create_folder(None, "two").expect("two");

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn listeners_see_the_tree_after_the_mutation() {
        let mut store = TreeStore::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = names.clone();
        store.subscribe(move |_, root| {
            sink.borrow_mut()
                .push(root.folders.iter().map(|f| f.name.clone()).collect::<Vec<_>>());
        });

        store.create_folder(None, "a").expect("a");
        assert_eq!(*names.borrow(), vec![vec!["a".to_string()]]);
    }

    #[test]
    fn mutations_write_through_and_reopen_continues_ids() {
        let storage = MemorySnapshotStorage::default();
        let persistence = TreePersistence::new(Rc::new(storage.clone()));
        let mut store = TreeStore::open(persistence.clone(), false);
        assert!(storage.is_empty());

        let docs = store.create_folder(None, "docs").expect("docs");
        let file = store
            .add_file(Some(docs), NewFile::named("a.txt"))
            .expect("file");
        assert!(storage.get(TREE_SNAPSHOT_KEY).is_some());

        let mut reopened = TreeStore::open(persistence, true);
        assert_eq!(reopened.root(), store.root());
        assert_eq!(reopened.create_folder(None, "next"), Ok(FolderId::new(3)));
        assert_eq!(
            reopened.add_file(None, NewFile::named("b.txt")),
            Ok(FileId::new(file.get() + 1))
        );
    }

    #[test]
    fn add_files_is_all_or_nothing() {
        let storage = MemorySnapshotStorage::default();
        let mut store = TreeStore::open(TreePersistence::new(Rc::new(storage.clone())), false);
        let seen = recorded(&mut store);

        assert_eq!(
            store.add_files(None, vec![NewFile::named("ok.txt"), NewFile::named("  ")]),
            Err(StoreError::EmptyName)
        );
        assert!(store.root().is_empty());
        assert!(seen.borrow().is_empty());
        assert!(storage.is_empty());

        let added = store
            .add_files(None, vec![NewFile::named(" a.txt "), NewFile::named("b.txt")])
            .expect("batch");
        assert_eq!(added, vec![FileId::new(1), FileId::new(2)]);
        assert_eq!(store.root().files[0].name, "a.txt");
        assert_eq!(seen.borrow().len(), 2);
        assert!(storage.get(TREE_SNAPSHOT_KEY).is_some());
    }

    #[test]
    fn reopen_after_ceiling_id_issues_fresh_ids() {
        let storage = MemorySnapshotStorage::with_entry(
            TREE_SNAPSHOT_KEY,
            r#"{ "id": "folder_1", "name": "root", "loaded": true,
                 "folders": [ { "id": "folder_18446744073709551615", "name": "far" } ] }"#,
        );
        let mut store = TreeStore::open(TreePersistence::new(Rc::new(storage)), false);
        let far = store.root().folders[0].id;
        assert_eq!(far, FolderId::new(2));

        let next = store.create_folder(None, "next").expect("next");
        assert_eq!(next, FolderId::new(3));
        assert_eq!(store.counts().folders, 3);
    }

    #[test]
    fn open_without_snapshot_seeds_demo_data_without_saving() {
        let storage = MemorySnapshotStorage::default();
        let store = TreeStore::open(TreePersistence::new(Rc::new(storage.clone())), true);

        let hits = store.search("readme");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind(), EntryKind::File);
        assert!(storage.is_empty());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_demo_tree() {
        let storage = MemorySnapshotStorage::with_entry(TREE_SNAPSHOT_KEY, "42");
        let store = TreeStore::open(TreePersistence::new(Rc::new(storage)), true);
        assert_eq!(store.root().folders.len(), 2);
    }
}
