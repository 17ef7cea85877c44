//! Search results list shown above the tree while a query is active.

use explorer_store::{EntryKind, EntryRef, Folder, DEFAULT_FILE_DESCRIPTION};
use explorer_ui::{EmptyState, EntryButton, PaneHeader};
use leptos::{ev::MouseEvent, *};

use crate::{
    app::use_explorer,
    controller::{EntryTarget, ExplorerAction},
    overlays::tooltip_anchor,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered search hit.
pub struct SearchRow {
    /// Entry selected when the row is clicked.
    pub target: EntryTarget,
    /// Folder or file, for the row badge.
    pub kind: EntryKind,
    /// Entry name as stored.
    pub name: String,
    /// Slash path of the folder the hit sits in (the folder itself for folder hits).
    pub path: String,
    /// Tooltip text; never empty.
    pub description: String,
}

/// Flattens the tree's search hits for `query` into display rows.
pub fn search_rows(root: &Folder, query: &str) -> Vec<SearchRow> {
    root.search(query)
        .into_iter()
        .map(|hit| {
            let target = match hit.item {
                EntryRef::Folder(folder) => EntryTarget::Folder(folder.id),
                EntryRef::File(file) => EntryTarget::File(file.id),
            };
            let description = match hit.item.description() {
                "" => DEFAULT_FILE_DESCRIPTION.to_string(),
                text => text.to_string(),
            };
            SearchRow {
                target,
                kind: hit.kind(),
                name: hit.item.name().to_string(),
                path: hit.path,
                description,
            }
        })
        .collect()
}

#[component]
/// Results for the settled search query; hidden while the query is blank.
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_explorer();
    let query = create_memo(move |_| ctx.view.with(|view| view.search_query.trim().to_string()));
    let rows = create_memo(move |_| {
        let query = query.get();
        if query.is_empty() {
            return Vec::new();
        }
        ctx.tree.with(|root| search_rows(root, &query))
    });
    let meta = Signal::derive(move || format!("{} match(es)", rows.with(Vec::len)));

    view! {
        <Show when=move || !query.get().is_empty() fallback=|| ()>
            <div class="explorer-search-results" data-ui-slot="search-results">
                <PaneHeader title="Search results" meta=meta />
                <Show
                    when=move || rows.with(|rows| !rows.is_empty())
                    fallback=|| view! { <EmptyState>"Nothing found"</EmptyState> }
                >
                    <ul class="explorer-search-list" role="listbox">
                        <For
                            each=move || rows.get()
                            key=|row| (row.target, row.name.clone(), row.path.clone())
                            children=move |row| view! { <SearchResultRow row=row /> }
                        />
                    </ul>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn SearchResultRow(row: SearchRow) -> impl IntoView {
    let ctx = use_explorer();
    let SearchRow {
        target,
        kind,
        name,
        path,
        description,
    } = row;

    let show_description = move |ev: MouseEvent| {
        ctx.show_tooltip(description.clone(), tooltip_anchor(&ev));
    };

    view! {
        <li role="option">
            <EntryButton
                badge=kind.badge()
                name=name
                detail=path
                ui_slot="search-result"
                on_click=Callback::new(move |_| {
                    ctx.dispatch_action(ExplorerAction::SelectFromSearch(target))
                })
                on_mouseenter=Callback::new(show_description)
                on_mouseleave=Callback::new(move |_| ctx.schedule_tooltip_hide())
            />
        </li>
    }
}
