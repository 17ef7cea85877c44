//! Modal prompt and confirmation dialogs.

use explorer_store::{Folder, FolderId, DEFAULT_FOLDER_NAME};
use explorer_ui::{ActionRow, Button, ButtonVariant, Modal, Text, TextField, TextTone};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    app::use_explorer,
    controller::{EntryTarget, ExplorerAction},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Open dialog and the action it completes.
pub enum DialogRequest {
    /// Prompt for a new folder name.
    CreateFolder {
        /// Parent folder; `None` defers to the controller's create target.
        parent: Option<FolderId>,
    },
    /// Prompt for a new entry name.
    Rename {
        /// Entry being renamed.
        target: EntryTarget,
        /// Name shown pre-filled.
        current_name: String,
    },
    /// Delete confirmation.
    ConfirmDelete {
        /// Entry to delete.
        target: EntryTarget,
        /// `folder "name"` / `file "name"`.
        label: String,
    },
}

impl DialogRequest {
    /// Rename prompt for `target`, or `None` when it no longer exists.
    pub fn rename(target: EntryTarget, root: &Folder) -> Option<Self> {
        target.name_in(root).map(|current_name| Self::Rename {
            target,
            current_name,
        })
    }

    /// Delete confirmation for `target`.
    pub fn confirm_delete(target: EntryTarget, root: &Folder) -> Self {
        Self::ConfirmDelete {
            target,
            label: target.label_in(root),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::CreateFolder { .. } => "New folder".to_string(),
            Self::Rename { target, .. } => format!("Rename {}", target.kind().as_str()),
            Self::ConfirmDelete { label, .. } => format!("Delete {label}?"),
        }
    }

    /// Pre-filled input text; `None` for confirmations, which have no input.
    pub fn initial_value(&self) -> Option<String> {
        match self {
            Self::CreateFolder { .. } => Some(DEFAULT_FOLDER_NAME.to_string()),
            Self::Rename { current_name, .. } => Some(current_name.clone()),
            Self::ConfirmDelete { .. } => None,
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::ConfirmDelete { .. } => "Delete",
            _ => "OK",
        }
    }

    /// Turns the confirmed dialog into a controller action.
    ///
    /// Prompts answered with blank input produce no action.
    pub fn into_action(self, input: &str) -> Option<ExplorerAction> {
        let name = input.trim();
        match self {
            Self::ConfirmDelete { target, .. } => Some(ExplorerAction::DeleteEntry(target)),
            _ if name.is_empty() => None,
            Self::CreateFolder { parent } => Some(ExplorerAction::CreateFolder {
                parent,
                name: name.to_string(),
            }),
            Self::Rename { target, .. } => Some(ExplorerAction::RenameEntry {
                target,
                name: name.to_string(),
            }),
        }
    }
}

#[component]
/// Renders the open dialog, if any.
pub fn DialogHost() -> impl IntoView {
    let ctx = use_explorer();
    move || ctx.dialog.get().map(|request| view! { <DialogView request=request /> })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKey {
    Confirm,
    Cancel,
}

/// Escape cancels from anywhere in the dialog; Enter confirms only from the name field.
fn dialog_key(key: &str, in_name_field: bool) -> Option<DialogKey> {
    match key {
        "Escape" => Some(DialogKey::Cancel),
        "Enter" if in_name_field => Some(DialogKey::Confirm),
        _ => None,
    }
}

#[component]
fn DialogView(request: DialogRequest) -> impl IntoView {
    let ctx = use_explorer();
    let title = request.title();
    let confirm_label = request.confirm_label();
    let has_input = request.initial_value().is_some();
    let input = create_rw_signal(request.initial_value().unwrap_or_default());
    let pending = store_value(Some(request));
    let input_ref = create_node_ref::<html::Input>();
    let dialog_ref = create_node_ref::<html::Div>();

    let close = move || {
        pending.set_value(None);
        ctx.dialog.set(None);
    };
    let confirm = move || {
        let action = pending
            .try_update_value(Option::take)
            .flatten()
            .and_then(|request| request.into_action(&input.get_untracked()));
        ctx.dialog.set(None);
        if let Some(action) = action {
            ctx.dispatch_action(action);
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let in_name_field = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .is_some();
        match dialog_key(&ev.key(), in_name_field) {
            Some(DialogKey::Confirm) => {
                ev.prevent_default();
                confirm();
            }
            Some(DialogKey::Cancel) => {
                ev.prevent_default();
                close();
            }
            None => {}
        }
    };

    input_ref.on_load(move |el| {
        let _ = el.focus();
        el.select();
    });
    dialog_ref.on_load(move |el| {
        if !has_input {
            let _ = el.focus();
        }
    });

    view! {
        <Modal
            title=title
            node_ref=dialog_ref
            on_dismiss=Callback::new(move |_| close())
            on_keydown=Callback::new(on_keydown)
        >
            <Show
                when=move || has_input
                fallback=move || view! {
                    <Text tone=TextTone::Secondary>"This cannot be undone."</Text>
                }
            >
                <TextField
                    node_ref=input_ref
                    aria_label="Name"
                    ui_slot="dialog-input"
                    value=input
                    on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                />
            </Show>
            <ActionRow ui_slot="dialog-actions">
                <Button on_click=Callback::new(move |_| close())>"Cancel"</Button>
                <Button
                    variant=if has_input { ButtonVariant::Primary } else { ButtonVariant::Danger }
                    on_click=Callback::new(move |_| confirm())
                >
                    {confirm_label}
                </Button>
            </ActionRow>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use explorer_store::{NewFile, TreeStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn create_prompt_defaults_and_trims() {
        let request = DialogRequest::CreateFolder { parent: None };
        assert_eq!(request.initial_value().as_deref(), Some("New folder"));
        assert_eq!(request.confirm_label(), "OK");
        assert_eq!(
            request.clone().into_action("  Music "),
            Some(ExplorerAction::CreateFolder {
                parent: None,
                name: "Music".to_string(),
            })
        );
        assert_eq!(request.into_action("   "), None);
    }

    #[test]
    fn rename_prompt_starts_from_the_current_name() {
        let mut store = TreeStore::new();
        let file = store
            .add_file(None, NewFile::named("a.txt"))
            .expect("file");
        let target = EntryTarget::File(file);

        let request = DialogRequest::rename(target, store.root()).expect("rename");
        assert_eq!(request.title(), "Rename file");
        assert_eq!(request.initial_value().as_deref(), Some("a.txt"));
        assert_eq!(
            request.into_action("b.txt"),
            Some(ExplorerAction::RenameEntry {
                target,
                name: "b.txt".to_string(),
            })
        );

        store.delete_file(file).expect("delete");
        assert_eq!(DialogRequest::rename(target, store.root()), None);
    }

    #[test]
    fn escape_cancels_anywhere_but_enter_only_confirms_from_the_field() {
        assert_eq!(dialog_key("Escape", false), Some(DialogKey::Cancel));
        assert_eq!(dialog_key("Escape", true), Some(DialogKey::Cancel));
        assert_eq!(dialog_key("Enter", true), Some(DialogKey::Confirm));
        assert_eq!(dialog_key("Enter", false), None);
        assert_eq!(dialog_key("a", true), None);
    }

    #[test]
    fn delete_confirmation_names_the_entry() {
        let mut store = TreeStore::new();
        let folder = store.create_folder(None, "Old").expect("folder");
        let target = EntryTarget::Folder(folder);

        let request = DialogRequest::confirm_delete(target, store.root());
        assert_eq!(request.title(), "Delete folder \"Old\"?");
        assert_eq!(request.initial_value(), None);
        assert_eq!(request.confirm_label(), "Delete");
        assert_eq!(request.into_action(""), Some(ExplorerAction::DeleteEntry(target)));
    }
}
