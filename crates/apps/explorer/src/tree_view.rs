//! Folder/file tree in the sidebar.
//!
//! Each level is a [`TreeBranch`] keyed by entry id, so renames and content edits only touch the
//! affected row. A branch under a collapsed folder is not mounted at all.

use explorer_store::{EntryKind, FileId, FolderId, DEFAULT_FILE_DESCRIPTION};
use explorer_ui::{DisclosureToggle, EntryButton, EntryRow, Text, TextTone, Tree};
use leptos::{ev::MouseEvent, *};

use crate::{
    app::{use_explorer, ExplorerContext},
    controller::{EntryTarget, ExplorerAction},
    overlays::{open_context_menu, tooltip_anchor},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BranchListing {
    folders: Vec<FolderId>,
    files: Vec<FileId>,
}

fn branch_listing(ctx: ExplorerContext, folder: FolderId) -> BranchListing {
    ctx.tree.with(|root| {
        root.find_folder(folder)
            .map(|folder| BranchListing {
                folders: folder.folders.iter().map(|child| child.id).collect(),
                files: folder.files.iter().map(|file| file.id).collect(),
            })
            .unwrap_or_default()
    })
}

#[component]
/// Sidebar tree rooted at the store's root folder.
pub fn TreeView() -> impl IntoView {
    let ctx = use_explorer();
    let root_id = ctx.tree.with_untracked(|root| root.id);

    view! {
        <Tree aria_label="Folders">
            <TreeBranch folder=root_id depth=0 />
        </Tree>
    }
}

#[component]
/// Child folders, then files, of one folder.
pub fn TreeBranch(folder: FolderId, depth: usize) -> impl IntoView {
    let ctx = use_explorer();
    let listing = create_memo(move |_| branch_listing(ctx, folder));

    view! {
        <For
            each=move || listing.get().folders
            key=|id| *id
            children=move |id| view! { <FolderRow id=id depth=depth /> }
        />
        <For
            each=move || listing.get().files
            key=|id| *id
            children=move |id| view! { <FileRow id=id depth=depth /> }
        />
    }
}

// Boxed into `View` so the recursion through `TreeBranch` has a concrete type.
fn nested_branch(folder: FolderId, depth: usize) -> View {
    view! {
        <ul class="explorer-tree-group" role="group">
            <TreeBranch folder=folder depth=depth />
        </ul>
    }
    .into_view()
}

#[component]
fn FolderRow(id: FolderId, depth: usize) -> impl IntoView {
    let ctx = use_explorer();
    let target = EntryTarget::Folder(id);
    let name = create_memo(move |_| {
        ctx.tree
            .with(|root| root.find_folder(id).map(|folder| folder.name.clone()))
            .unwrap_or_default()
    });
    let expanded = create_memo(move |_| ctx.view.with(|view| view.expanded.contains(&id)));
    let loading = create_memo(move |_| ctx.view.with(|view| view.loading.contains(&id)));
    let selected = create_memo(move |_| ctx.view.with(|view| view.is_selected(target)));

    let toggle = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.dispatch_action(ExplorerAction::ToggleExpanded(id));
    };

    view! {
        <EntryRow
            entry=EntryKind::Folder.as_str()
            selected=selected
            expanded=Signal::derive(move || Some(expanded.get()))
            depth=depth
        >
            <div class="explorer-tree-row" data-ui-slot="row">
                <DisclosureToggle expanded=expanded on_toggle=Callback::new(toggle) />
                <EntryButton
                    badge=EntryKind::Folder.badge()
                    name=name
                    ui_slot="tree-entry"
                    selected=selected
                    on_click=Callback::new(move |_| ctx.dispatch_action(ExplorerAction::SelectFolder(id)))
                    on_contextmenu=Callback::new(move |ev| open_context_menu(ctx, ev, target))
                />
            </div>
            <Show when=move || expanded.get() fallback=|| ()>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Text tone=TextTone::Secondary ui_slot="tree-loading">"Loading…"</Text> }
                >
                    {nested_branch(id, depth + 1)}
                </Show>
            </Show>
        </EntryRow>
    }
}

#[component]
fn FileRow(id: FileId, depth: usize) -> impl IntoView {
    let ctx = use_explorer();
    let target = EntryTarget::File(id);
    let name = create_memo(move |_| {
        ctx.tree
            .with(|root| root.find_file(id).map(|(file, _)| file.name.clone()))
            .unwrap_or_default()
    });
    let selected = create_memo(move |_| ctx.view.with(|view| view.is_selected(target)));

    let show_description = move |ev: MouseEvent| {
        let description = ctx.tree.with_untracked(|root| {
            root.find_file(id)
                .map(|(file, _)| file.description.clone())
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| DEFAULT_FILE_DESCRIPTION.to_string())
        });
        ctx.show_tooltip(description, tooltip_anchor(&ev));
    };

    view! {
        <EntryRow entry=EntryKind::File.as_str() selected=selected depth=depth>
            <EntryButton
                badge=EntryKind::File.badge()
                name=name
                ui_slot="tree-entry"
                selected=selected
                on_click=Callback::new(move |_| ctx.dispatch_action(ExplorerAction::SelectFile(id)))
                on_contextmenu=Callback::new(move |ev| open_context_menu(ctx, ev, target))
                on_mouseenter=Callback::new(show_description)
                on_mouseleave=Callback::new(move |_| ctx.schedule_tooltip_hide())
            />
        </EntryRow>
    }
}
