//! Selection cursor, view state, and the action reducer that drives the tree store.
//!
//! [`reduce_explorer`] is the only place UI intent turns into store mutations. It is pure apart
//! from the store it is handed, so every transition is covered by native tests.

use std::collections::BTreeSet;

use explorer_store::{
    EntryKind, FileId, Folder, FolderId, NewFile, StoreError, TreeStore,
};
use platform_host::UploadedFile;
use thiserror::Error;

/// Description given to every uploaded file.
pub const UPLOADED_FILE_DESCRIPTION: &str = "Uploaded file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A folder or file the user acted on.
pub enum EntryTarget {
    /// A folder.
    Folder(FolderId),
    /// A file.
    File(FileId),
}

impl EntryTarget {
    /// Kind of the targeted entry.
    pub fn kind(self) -> EntryKind {
        match self {
            Self::Folder(_) => EntryKind::Folder,
            Self::File(_) => EntryKind::File,
        }
    }

    /// Current display name, if the entry still exists.
    pub fn name_in(self, root: &Folder) -> Option<String> {
        match self {
            Self::Folder(id) => root.find_folder(id).map(|folder| folder.name.clone()),
            Self::File(id) => root.find_file(id).map(|(file, _)| file.name.clone()),
        }
    }

    /// `folder "name"` / `file "name"`, used in confirmations and notices.
    pub fn label_in(self, root: &Folder) -> String {
        let noun = self.kind().as_str();
        match self.name_in(root) {
            Some(name) => format!("{noun} \"{name}\""),
            None => format!("unknown {noun}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Currently selected folder and, optionally, a file inside it.
pub struct ExplorerCursor {
    /// Folder whose contents the preview lists, or that holds the selected file.
    pub selected_folder: FolderId,
    /// Selected file, if any.
    pub selected_file: Option<FileId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Open context menu and what it acts on.
pub struct ContextMenuState {
    /// Entry the menu was opened on.
    pub target: EntryTarget,
    /// Viewport x coordinate in pixels.
    pub x: i32,
    /// Viewport y coordinate in pixels.
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// View state owned by the controller.
pub struct ExplorerViewState {
    /// Selection cursor.
    pub cursor: ExplorerCursor,
    /// Folders shown expanded in the tree.
    pub expanded: BTreeSet<FolderId>,
    /// Folders waiting on their first-load delay.
    pub loading: BTreeSet<FolderId>,
    /// Open context menu.
    pub context_menu: Option<ContextMenuState>,
    /// Settled (debounced) search query.
    pub search_query: String,
}

impl ExplorerViewState {
    /// Fresh state with the root selected.
    pub fn new(root: FolderId) -> Self {
        Self {
            cursor: ExplorerCursor {
                selected_folder: root,
                selected_file: None,
            },
            expanded: BTreeSet::new(),
            loading: BTreeSet::new(),
            context_menu: None,
            search_query: String::new(),
        }
    }

    /// Folder a "new folder" request applies to: the context-menu folder, else the selection.
    pub fn create_target(&self) -> FolderId {
        match self.context_menu.map(|menu| menu.target) {
            Some(EntryTarget::Folder(id)) => id,
            _ => self.cursor.selected_folder,
        }
    }

    /// Whether `target` is the highlighted tree row.
    pub fn is_selected(&self, target: EntryTarget) -> bool {
        match (target, self.cursor.selected_file) {
            (EntryTarget::File(id), Some(selected)) => id == selected,
            (EntryTarget::Folder(id), None) => id == self.cursor.selected_folder,
            _ => false,
        }
    }

    /// Path bar text for the current selection.
    pub fn display_path(&self, root: &Folder) -> String {
        self.cursor
            .selected_file
            .and_then(|id| root.file_path(id))
            .unwrap_or_else(|| root.path_of(self.cursor.selected_folder))
    }

    /// Whether "up one level" is available.
    pub fn can_go_up(&self, root: &Folder) -> bool {
        self.cursor.selected_file.is_some() || self.cursor.selected_folder != root.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// UI intent handled by [`reduce_explorer`].
pub enum ExplorerAction {
    /// Select a folder and list its contents.
    SelectFolder(FolderId),
    /// Select a file and preview it.
    SelectFile(FileId),
    /// Select an entry picked from the search results.
    SelectFromSearch(EntryTarget),
    /// Leave the selected file, or move to the parent folder.
    GoToParent,
    /// Expand or collapse a folder row.
    ToggleExpanded(FolderId),
    /// First-load delay for a folder elapsed.
    FinishLoad(FolderId),
    /// Open the context menu on an entry.
    OpenContextMenu {
        /// Entry under the pointer.
        target: EntryTarget,
        /// Viewport x coordinate.
        x: i32,
        /// Viewport y coordinate.
        y: i32,
    },
    /// Dismiss the context menu.
    CloseContextMenu,
    /// Create a folder; `None` resolves through [`ExplorerViewState::create_target`].
    CreateFolder {
        /// Parent folder.
        parent: Option<FolderId>,
        /// Folder name.
        name: String,
    },
    /// Rename a folder or file.
    RenameEntry {
        /// Entry to rename.
        target: EntryTarget,
        /// New name.
        name: String,
    },
    /// Delete a folder (with its subtree) or a file.
    DeleteEntry(EntryTarget),
    /// Add picked files to the selected folder.
    UploadFiles(Vec<UploadedFile>),
    /// Replace a text file's content.
    EditFileContent {
        /// File to edit.
        id: FileId,
        /// New text.
        content: String,
    },
    /// Apply a settled search query.
    SetSearchQuery(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects the view layer runs after a successful action.
pub enum ExplorerEffect {
    /// Wait the lazy-load delay, then dispatch [`ExplorerAction::FinishLoad`].
    SimulateLoad(FolderId),
    /// Show a status bar message.
    Notice(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by [`reduce_explorer`].
pub enum ControllerError {
    /// The tree store rejected the mutation or lookup.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applies an [`ExplorerAction`] to the store and view state and collects resulting effects.
///
/// # Errors
///
/// Returns [`ControllerError::Store`] when the action targets a missing entry or carries an
/// invalid name. The view state is left unchanged in that case.
pub fn reduce_explorer(
    store: &mut TreeStore,
    view: &mut ExplorerViewState,
    action: ExplorerAction,
) -> Result<Vec<ExplorerEffect>, ControllerError> {
    let mut effects = Vec::new();
    match action {
        ExplorerAction::SelectFolder(id) => {
            select_folder(store, view, id)?;
        }
        ExplorerAction::SelectFile(id) => {
            select_file(store, view, id)?;
        }
        ExplorerAction::SelectFromSearch(EntryTarget::Folder(id)) => {
            select_folder(store, view, id)?;
        }
        ExplorerAction::SelectFromSearch(EntryTarget::File(id)) => {
            select_file(store, view, id)?;
        }
        ExplorerAction::GoToParent => {
            let cursor = view.cursor;
            if cursor.selected_file.is_some() {
                select_folder(store, view, cursor.selected_folder)?;
            } else if let Some(parent) = store.parent_of(cursor.selected_folder).map(|p| p.id) {
                select_folder(store, view, parent)?;
            } else if cursor.selected_folder != store.root_id() {
                let root = store.root_id();
                select_folder(store, view, root)?;
            }
        }
        ExplorerAction::ToggleExpanded(id) => {
            let folder = store
                .find_folder(id)
                .ok_or(StoreError::FolderNotFound(id))?;
            if view.expanded.remove(&id) {
                view.loading.remove(&id);
            } else {
                view.expanded.insert(id);
                if !folder.loaded && view.loading.insert(id) {
                    effects.push(ExplorerEffect::SimulateLoad(id));
                }
            }
        }
        ExplorerAction::FinishLoad(id) => {
            view.loading.remove(&id);
            if store.find_folder(id).is_some() {
                store.load_children(id)?;
            }
        }
        ExplorerAction::OpenContextMenu { target, x, y } => {
            ensure_exists(store, target)?;
            view.context_menu = Some(ContextMenuState { target, x, y });
        }
        ExplorerAction::CloseContextMenu => {
            view.context_menu = None;
        }
        ExplorerAction::CreateFolder { parent, name } => {
            let parent = parent.unwrap_or_else(|| view.create_target());
            let id = store.create_folder(Some(parent), &name)?;
            view.context_menu = None;
            view.expanded.insert(parent);
            let created = store.find_folder(id).map(|f| f.name.clone()).unwrap_or(name);
            effects.push(ExplorerEffect::Notice(format!("Created folder \"{created}\"")));
        }
        ExplorerAction::RenameEntry { target, name } => {
            match target {
                EntryTarget::Folder(id) => store.rename_folder(id, &name)?,
                EntryTarget::File(id) => store.rename_file(id, &name)?,
            }
            view.context_menu = None;
            effects.push(ExplorerEffect::Notice(format!(
                "Renamed to {}",
                target.label_in(store.root())
            )));
        }
        ExplorerAction::DeleteEntry(target) => {
            let label = target.label_in(store.root());
            match target {
                EntryTarget::Folder(id) => delete_folder(store, view, id)?,
                EntryTarget::File(id) => {
                    store.delete_file(id)?;
                    if view.cursor.selected_file == Some(id) {
                        view.cursor.selected_file = None;
                    }
                }
            }
            view.context_menu = None;
            effects.push(ExplorerEffect::Notice(format!("Deleted {label}")));
        }
        ExplorerAction::UploadFiles(files) => {
            if files.is_empty() {
                return Ok(effects);
            }
            let batch = files
                .into_iter()
                .map(|file| {
                    NewFile::named(file.name)
                        .with_type(file.mime_type)
                        .with_size(file.size)
                        .with_content(file.content)
                        .with_description(UPLOADED_FILE_DESCRIPTION)
                })
                .collect();
            let count = store
                .add_files(Some(view.cursor.selected_folder), batch)?
                .len();
            effects.push(ExplorerEffect::Notice(format!("Uploaded {count} file(s)")));
        }
        ExplorerAction::EditFileContent { id, content } => {
            store.update_file_content(id, content)?;
            effects.push(ExplorerEffect::Notice(format!(
                "Saved {}",
                EntryTarget::File(id).label_in(store.root())
            )));
        }
        ExplorerAction::SetSearchQuery(query) => {
            view.search_query = query;
        }
    }
    Ok(effects)
}

fn ensure_exists(store: &TreeStore, target: EntryTarget) -> Result<(), StoreError> {
    match target {
        EntryTarget::Folder(id) if store.find_folder(id).is_none() => {
            Err(StoreError::FolderNotFound(id))
        }
        EntryTarget::File(id) if store.find_file(id).is_none() => Err(StoreError::FileNotFound(id)),
        _ => Ok(()),
    }
}

fn select_folder(
    store: &mut TreeStore,
    view: &mut ExplorerViewState,
    id: FolderId,
) -> Result<(), StoreError> {
    let ancestors: Vec<FolderId> = store
        .root()
        .ancestry(id)
        .ok_or(StoreError::FolderNotFound(id))?
        .iter()
        .map(|folder| folder.id)
        .collect();
    view.cursor = ExplorerCursor {
        selected_folder: id,
        selected_file: None,
    };
    view.context_menu = None;
    reveal(store, view, &ancestors[..ancestors.len() - 1])
}

fn select_file(
    store: &mut TreeStore,
    view: &mut ExplorerViewState,
    id: FileId,
) -> Result<(), StoreError> {
    let parent = store
        .find_file(id)
        .map(|(_, parent)| parent.id)
        .ok_or(StoreError::FileNotFound(id))?;
    let ancestors: Vec<FolderId> = store
        .root()
        .ancestry(parent)
        .unwrap_or_default()
        .iter()
        .map(|folder| folder.id)
        .collect();
    view.cursor = ExplorerCursor {
        selected_folder: parent,
        selected_file: Some(id),
    };
    view.context_menu = None;
    reveal(store, view, &ancestors)
}

/// Expands every folder in `chain`, marking unloaded ones loaded without the delay.
fn reveal(
    store: &mut TreeStore,
    view: &mut ExplorerViewState,
    chain: &[FolderId],
) -> Result<(), StoreError> {
    for &id in chain {
        if id == store.root_id() {
            continue;
        }
        view.expanded.insert(id);
        view.loading.remove(&id);
        store.load_children(id)?;
    }
    Ok(())
}

fn delete_folder(
    store: &mut TreeStore,
    view: &mut ExplorerViewState,
    id: FolderId,
) -> Result<(), StoreError> {
    let parent = store.parent_of(id).map(|folder| folder.id);
    let cursor_inside = store
        .find_folder(id)
        .map(|folder| folder.find_folder(view.cursor.selected_folder).is_some())
        .unwrap_or(false);
    store.delete_folder(id)?;

    if cursor_inside {
        view.cursor = ExplorerCursor {
            selected_folder: parent.unwrap_or_else(|| store.root_id()),
            selected_file: None,
        };
    }
    let root = store.root();
    view.expanded.retain(|folder| root.find_folder(*folder).is_some());
    view.loading.retain(|folder| root.find_folder(*folder).is_some());
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixture {
        store: TreeStore,
        view: ExplorerViewState,
        docs: FolderId,
        nested: FolderId,
        note: FileId,
    }

    fn fixture() -> Fixture {
        let mut store = TreeStore::new();
        let docs = store.create_folder(None, "Docs").expect("docs");
        let nested = store.create_folder(Some(docs), "Nested").expect("nested");
        let note = store
            .add_file(
                Some(nested),
                NewFile::named("note.txt").with_type("text/plain").with_content("hi"),
            )
            .expect("note");
        let view = ExplorerViewState::new(store.root_id());
        Fixture {
            store,
            view,
            docs,
            nested,
            note,
        }
    }

    impl Fixture {
        fn run(&mut self, action: ExplorerAction) -> Vec<ExplorerEffect> {
            reduce_explorer(&mut self.store, &mut self.view, action).expect("action")
        }
    }

    #[test]
    fn selecting_a_file_moves_cursor_and_expands_ancestors() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFile(fx.note));

        assert_eq!(
            fx.view.cursor,
            ExplorerCursor {
                selected_folder: fx.nested,
                selected_file: Some(fx.note),
            }
        );
        assert_eq!(
            fx.view.expanded.iter().copied().collect::<Vec<_>>(),
            vec![fx.docs, fx.nested]
        );
        assert!(fx.store.find_folder(fx.docs).expect("docs").loaded);
        assert_eq!(fx.view.display_path(fx.store.root()), "/root/Docs/Nested/note.txt");
        assert!(fx.view.is_selected(EntryTarget::File(fx.note)));
        assert!(!fx.view.is_selected(EntryTarget::Folder(fx.nested)));
    }

    #[test]
    fn selecting_a_folder_clears_the_file_and_reveals_parents_only() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFile(fx.note));
        fx.view.expanded.clear();

        fx.run(ExplorerAction::SelectFromSearch(EntryTarget::Folder(fx.nested)));

        assert_eq!(fx.view.cursor.selected_file, None);
        assert_eq!(fx.view.cursor.selected_folder, fx.nested);
        assert_eq!(fx.view.expanded.iter().copied().collect::<Vec<_>>(), vec![fx.docs]);
    }

    #[test]
    fn go_to_parent_leaves_file_then_climbs_to_root() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFile(fx.note));

        fx.run(ExplorerAction::GoToParent);
        assert_eq!(fx.view.cursor.selected_file, None);
        assert_eq!(fx.view.cursor.selected_folder, fx.nested);

        fx.run(ExplorerAction::GoToParent);
        assert_eq!(fx.view.cursor.selected_folder, fx.docs);

        fx.run(ExplorerAction::GoToParent);
        let root = fx.store.root_id();
        assert_eq!(fx.view.cursor.selected_folder, root);
        assert!(!fx.view.can_go_up(fx.store.root()));

        fx.run(ExplorerAction::GoToParent);
        assert_eq!(fx.view.cursor.selected_folder, root);
    }

    #[test]
    fn first_expansion_of_unloaded_folder_simulates_load() {
        let mut fx = fixture();

        let effects = fx.run(ExplorerAction::ToggleExpanded(fx.docs));
        assert_eq!(effects, vec![ExplorerEffect::SimulateLoad(fx.docs)]);
        assert!(fx.view.loading.contains(&fx.docs));

        fx.run(ExplorerAction::FinishLoad(fx.docs));
        assert!(fx.view.loading.is_empty());
        assert!(fx.store.find_folder(fx.docs).expect("docs").loaded);

        assert!(fx.run(ExplorerAction::ToggleExpanded(fx.docs)).is_empty());
        assert!(!fx.view.expanded.contains(&fx.docs));
        assert!(fx.run(ExplorerAction::ToggleExpanded(fx.docs)).is_empty());
        assert!(fx.view.expanded.contains(&fx.docs));
    }

    #[test]
    fn finish_load_for_deleted_folder_is_ignored() {
        let mut fx = fixture();
        fx.run(ExplorerAction::ToggleExpanded(fx.nested));
        fx.store.delete_folder(fx.docs).expect("delete");

        assert!(fx.run(ExplorerAction::FinishLoad(fx.nested)).is_empty());
        assert!(fx.view.loading.is_empty());
    }

    #[test]
    fn create_folder_prefers_context_folder_then_selection() {
        let mut fx = fixture();
        fx.run(
            ExplorerAction::OpenContextMenu {
                target: EntryTarget::Folder(fx.nested),
                x: 10,
                y: 20,
            },
        );
        assert_eq!(fx.view.create_target(), fx.nested);

        let effects = fx.run(
            ExplorerAction::CreateFolder {
                parent: None,
                name: " Drafts ".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![ExplorerEffect::Notice("Created folder \"Drafts\"".to_string())]
        );
        assert_eq!(fx.view.context_menu, None);
        let nested = fx.store.find_folder(fx.nested).expect("nested");
        assert_eq!(nested.folders[0].name, "Drafts");

        fx.run(ExplorerAction::SelectFolder(fx.docs));
        fx.run(
            ExplorerAction::OpenContextMenu {
                target: EntryTarget::File(fx.note),
                x: 0,
                y: 0,
            },
        );
        assert_eq!(fx.view.create_target(), fx.docs);
    }

    #[test]
    fn invalid_actions_surface_store_errors() {
        let mut fx = fixture();
        let missing = FolderId::new(99);

        assert_eq!(
            reduce_explorer(&mut fx.store, &mut fx.view, ExplorerAction::SelectFolder(missing)),
            Err(ControllerError::Store(StoreError::FolderNotFound(missing)))
        );
        assert_eq!(
            reduce_explorer(
                &mut fx.store,
                &mut fx.view,
                ExplorerAction::RenameEntry {
                    target: EntryTarget::File(fx.note),
                    name: "  ".to_string(),
                }
            ),
            Err(ControllerError::Store(StoreError::EmptyName))
        );
        let root = fx.store.root_id();
        assert_eq!(
            reduce_explorer(
                &mut fx.store,
                &mut fx.view,
                ExplorerAction::DeleteEntry(EntryTarget::Folder(root))
            ),
            Err(ControllerError::Store(StoreError::RootFolder))
        );
        assert_eq!(fx.view, ExplorerViewState::new(root));
    }

    #[test]
    fn deleting_the_selected_file_clears_the_file_cursor() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFile(fx.note));

        let effects = fx.run(ExplorerAction::DeleteEntry(EntryTarget::File(fx.note)));

        assert_eq!(
            effects,
            vec![ExplorerEffect::Notice("Deleted file \"note.txt\"".to_string())]
        );
        assert_eq!(fx.view.cursor.selected_file, None);
        assert_eq!(fx.view.cursor.selected_folder, fx.nested);
    }

    #[test]
    fn deleting_an_ancestor_of_the_cursor_moves_it_to_the_parent() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFile(fx.note));

        fx.run(ExplorerAction::DeleteEntry(EntryTarget::Folder(fx.docs)));

        assert_eq!(fx.view.cursor, ExplorerViewState::new(fx.store.root_id()).cursor);
        assert!(fx.view.expanded.is_empty());
    }

    #[test]
    fn deleting_an_unrelated_folder_keeps_the_cursor() {
        let mut fx = fixture();
        let other = fx.store.create_folder(None, "Other").expect("other");
        fx.run(ExplorerAction::SelectFile(fx.note));

        fx.run(ExplorerAction::DeleteEntry(EntryTarget::Folder(other)));

        assert_eq!(fx.view.cursor.selected_file, Some(fx.note));
    }

    #[test]
    fn uploads_land_in_the_selected_folder() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFolder(fx.docs));

        let effects = fx.run(
            ExplorerAction::UploadFiles(vec![
                UploadedFile {
                    name: "photo.png".to_string(),
                    mime_type: "image/png".to_string(),
                    size: 4,
                    content: "data:image/png;base64,AAAA".to_string(),
                },
                UploadedFile {
                    name: "a.md".to_string(),
                    mime_type: String::new(),
                    size: 1,
                    content: "#".to_string(),
                },
            ]),
        );

        assert_eq!(effects, vec![ExplorerEffect::Notice("Uploaded 2 file(s)".to_string())]);
        let docs = fx.store.find_folder(fx.docs).expect("docs");
        let names: Vec<_> = docs.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["photo.png", "a.md"]);
        assert!(docs
            .files
            .iter()
            .all(|f| f.description == UPLOADED_FILE_DESCRIPTION));
        assert!(fx.run(ExplorerAction::UploadFiles(Vec::new())).is_empty());
    }

    #[test]
    fn upload_with_a_blank_name_adds_nothing() {
        let mut fx = fixture();
        fx.run(ExplorerAction::SelectFolder(fx.docs));
        let before = fx.store.root().clone();
        let view_before = fx.view.clone();

        let err = reduce_explorer(
            &mut fx.store,
            &mut fx.view,
            ExplorerAction::UploadFiles(vec![
                UploadedFile {
                    name: "kept.txt".to_string(),
                    mime_type: "text/plain".to_string(),
                    size: 1,
                    content: "k".to_string(),
                },
                UploadedFile {
                    name: "   ".to_string(),
                    mime_type: String::new(),
                    size: 0,
                    content: String::new(),
                },
            ]),
        );

        assert_eq!(err, Err(ControllerError::Store(StoreError::EmptyName)));
        assert_eq!(fx.store.root(), &before);
        assert_eq!(fx.view, view_before);
        assert_eq!(
            fx.store.add_file(None, NewFile::named("next.txt")),
            Ok(FileId::new(fx.note.get() + 1))
        );
    }

    #[test]
    fn editing_content_updates_size_and_reports_save() {
        let mut fx = fixture();
        let effects = fx.run(
            ExplorerAction::EditFileContent {
                id: fx.note,
                content: "hello world".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![ExplorerEffect::Notice("Saved file \"note.txt\"".to_string())]
        );
        let (file, _) = fx.store.find_file(fx.note).expect("note");
        assert_eq!(file.size, 11);
    }

    #[test]
    fn rename_reports_the_new_name() {
        let mut fx = fixture();
        let effects = fx.run(
            ExplorerAction::RenameEntry {
                target: EntryTarget::Folder(fx.docs),
                name: "Papers".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![ExplorerEffect::Notice("Renamed to folder \"Papers\"".to_string())]
        );
        assert_eq!(fx.store.path_of(fx.nested), "/root/Papers/Nested");
    }

    #[test]
    fn context_menu_on_missing_entry_is_rejected() {
        let mut fx = fixture();
        let missing = FileId::new(404);
        assert_eq!(
            reduce_explorer(
                &mut fx.store,
                &mut fx.view,
                ExplorerAction::OpenContextMenu {
                    target: EntryTarget::File(missing),
                    x: 0,
                    y: 0,
                }
            ),
            Err(ControllerError::Store(StoreError::FileNotFound(missing)))
        );
        fx.run(ExplorerAction::SetSearchQuery("note".to_string()));
        assert_eq!(fx.view.search_query, "note");
    }
}
