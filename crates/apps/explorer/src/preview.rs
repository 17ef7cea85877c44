//! Preview pane: folder listing or file viewer for the current selection.

use explorer_store::{format_file_size, FileId, Folder, FolderId, PreviewKind};
use explorer_ui::{
    ActionRow, Button, ButtonVariant, EmptyState, PaneHeader, PreviewFrame, PreviewMedia, Text,
    TextArea, TextRole, TextTone,
};
use leptos::*;
use platform_host::DownloadRequest;

use crate::{
    app::{use_explorer, ExplorerContext},
    controller::{EntryTarget, ExplorerAction, ExplorerCursor},
    dialog::DialogRequest,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// File fields the viewer renders.
pub struct FilePreviewModel {
    /// Previewed file.
    pub id: FileId,
    /// File name, used as the header title and download name.
    pub name: String,
    /// MIME type; empty when the browser reported none.
    pub mime_type: String,
    /// Human-readable size (`1.5 KB`).
    pub size_label: String,
    /// Body renderer picked from the MIME type and name.
    pub kind: PreviewKind,
    /// Text, data URL, or object URL backing the body.
    pub content: Option<String>,
}

impl FilePreviewModel {
    /// `type • size` line under the file name.
    pub fn info_line(&self) -> String {
        let mime = if self.mime_type.is_empty() {
            "unknown type"
        } else {
            self.mime_type.as_str()
        };
        format!("{mime} • {}", self.size_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the preview pane shows.
pub enum PreviewModel {
    /// Nothing resolvable is selected.
    Empty,
    /// Contents of the selected folder.
    Folder {
        /// Selected folder.
        id: FolderId,
        /// Its name.
        name: String,
        /// Child folders in display order.
        folders: Vec<(FolderId, String)>,
        /// Child files in display order.
        files: Vec<(FileId, String)>,
    },
    /// The selected file.
    File(FilePreviewModel),
}

impl PreviewModel {
    /// Resolves the cursor against the tree.
    pub fn from_tree(root: &Folder, cursor: ExplorerCursor) -> Self {
        if let Some((file, _)) = cursor.selected_file.and_then(|id| root.find_file(id)) {
            return Self::File(FilePreviewModel {
                id: file.id,
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
                size_label: format_file_size(file.size),
                kind: PreviewKind::classify(&file.mime_type, &file.name),
                content: file.content.clone(),
            });
        }
        match root.find_folder(cursor.selected_folder) {
            Some(folder) => Self::Folder {
                id: folder.id,
                name: folder.name.clone(),
                folders: folder
                    .folders
                    .iter()
                    .map(|child| (child.id, child.name.clone()))
                    .collect(),
                files: folder
                    .files
                    .iter()
                    .map(|file| (file.id, file.name.clone()))
                    .collect(),
            },
            None => Self::Empty,
        }
    }
}

#[component]
/// Right-hand pane following the selection cursor.
pub fn PreviewPane() -> impl IntoView {
    let ctx = use_explorer();
    let model = create_memo(move |_| {
        let cursor = ctx.view.with(|view| view.cursor);
        ctx.tree.with(|root| PreviewModel::from_tree(root, cursor))
    });

    move || match model.get() {
        PreviewModel::Empty => view! {
            <EmptyState layout_class="explorer-preview-empty">
                "Select a file or folder to preview"
            </EmptyState>
        }
        .into_view(),
        PreviewModel::Folder {
            name, folders, files, ..
        } => view! { <FolderListing name=name folders=folders files=files /> }.into_view(),
        PreviewModel::File(file) => view! { <FileViewer file=file /> }.into_view(),
    }
}

#[component]
fn FolderListing(
    name: String,
    folders: Vec<(FolderId, String)>,
    files: Vec<(FileId, String)>,
) -> impl IntoView {
    let ctx = use_explorer();
    let empty = folders.is_empty() && files.is_empty();

    let folder_items = folders
        .into_iter()
        .map(|(id, name)| {
            view! {
                <li>
                    <Button
                        variant=ButtonVariant::Quiet
                        ui_slot="preview-folder"
                        on_click=Callback::new(move |_| {
                            ctx.dispatch_action(ExplorerAction::SelectFolder(id))
                        })
                    >
                        {name}
                    </Button>
                </li>
            }
        })
        .collect_view();
    let file_items = files
        .into_iter()
        .map(|(id, name)| {
            view! {
                <li>
                    <Button
                        variant=ButtonVariant::Quiet
                        ui_slot="preview-file"
                        on_click=Callback::new(move |_| {
                            ctx.dispatch_action(ExplorerAction::SelectFile(id))
                        })
                    >
                        {name}
                    </Button>
                </li>
            }
        })
        .collect_view();

    view! {
        <PaneHeader title=format!("Folder: {name}") />
        {if empty {
            view! { <EmptyState>"This folder is empty"</EmptyState> }.into_view()
        } else {
            view! {
                <ul class="explorer-preview-list">
                    {folder_items}
                    {file_items}
                </ul>
            }
            .into_view()
        }}
    }
}

fn download(ctx: ExplorerContext, file: &FilePreviewModel) {
    let request = DownloadRequest::new(file.name.clone(), file.content.as_deref());
    if let Err(err) = ctx.transfer.with_value(|transfer| transfer.download(&request)) {
        logging::warn!("explorer download failed: {err}");
        ctx.notice.set(Some(format!("Download failed: {err}")));
    }
}

#[component]
fn FileViewer(file: FilePreviewModel) -> impl IntoView {
    let ctx = use_explorer();
    let target = EntryTarget::File(file.id);
    let chrome = file.kind.shows_chrome();
    let info = file.info_line();
    let body = file_body(&file);
    let file = store_value(file);

    let header = chrome.then(|| {
        view! {
            <PaneHeader title=file.with_value(|file| file.name.clone()) meta=info />
        }
    });
    let controls = chrome.then(|| {
        view! {
            <ActionRow ui_slot="preview-controls">
                <Button on_click=Callback::new(move |_| file.with_value(|file| download(ctx, file)))>
                    "Download"
                </Button>
                <Button on_click=Callback::new(move |_| {
                    let request = ctx.tree.with_untracked(|root| DialogRequest::rename(target, root));
                    ctx.dialog.set(request);
                })>
                    "Rename"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| {
                        let request = ctx
                            .tree
                            .with_untracked(|root| DialogRequest::confirm_delete(target, root));
                        ctx.dialog.set(Some(request));
                    })
                >
                    "Delete"
                </Button>
            </ActionRow>
        }
    });

    view! {
        {header}
        <PreviewFrame media=preview_media(file.with_value(|file| file.kind))>
            {body}
        </PreviewFrame>
        {controls}
    }
}

fn preview_media(kind: PreviewKind) -> PreviewMedia {
    match kind {
        PreviewKind::Image => PreviewMedia::Image,
        PreviewKind::Audio => PreviewMedia::Audio,
        PreviewKind::Video => PreviewMedia::Video,
        PreviewKind::Pdf => PreviewMedia::Pdf,
        PreviewKind::Text => PreviewMedia::Text,
        PreviewKind::Unsupported => PreviewMedia::Unsupported,
    }
}

fn file_body(file: &FilePreviewModel) -> View {
    let source = file.content.clone().unwrap_or_default();
    match file.kind {
        PreviewKind::Image => view! {
            <img class="explorer-preview-image" src=source alt=file.name.clone() />
        }
        .into_view(),
        PreviewKind::Audio => view! { <audio controls=true src=source></audio> }.into_view(),
        PreviewKind::Video => view! {
            <video class="explorer-preview-video" controls=true src=source></video>
        }
        .into_view(),
        PreviewKind::Pdf => view! {
            <iframe class="explorer-preview-pdf" src=source title=file.name.clone()></iframe>
        }
        .into_view(),
        PreviewKind::Text => view! { <TextEditor id=file.id content=source /> }.into_view(),
        PreviewKind::Unsupported => view! {
            <EmptyState>
                <Text tone=TextTone::Secondary>"Preview is not available for this file type"</Text>
            </EmptyState>
        }
        .into_view(),
    }
}

#[component]
fn TextEditor(id: FileId, content: String) -> impl IntoView {
    let ctx = use_explorer();
    let saved = store_value(content.clone());
    let draft = create_rw_signal(content);
    let dirty = move || saved.with_value(|saved| draft.with(|draft| draft != saved));

    let save = move |_: ev::MouseEvent| {
        let content = draft.get_untracked();
        saved.set_value(content.clone());
        ctx.dispatch_action(ExplorerAction::EditFileContent { id, content });
    };

    view! {
        <TextArea
            aria_label="File content"
            value=draft
            on_input=Callback::new(move |ev| draft.set(event_target_value(&ev)))
        />
        <ActionRow ui_slot="editor-actions">
            <Button
                variant=ButtonVariant::Primary
                disabled=Signal::derive(move || !dirty())
                on_click=Callback::new(save)
            >
                "Save"
            </Button>
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {move || if dirty() { "Unsaved changes" } else { "" }}
            </Text>
        </ActionRow>
    }
}
