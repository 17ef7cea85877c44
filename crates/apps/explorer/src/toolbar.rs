//! Top toolbar, path bar, and status bar.

use explorer_ui::{Button, ButtonSize, ButtonVariant, StatusBar, Text, TextField, TextRole, ToolBar};
use leptos::{ev::MouseEvent, *};

use crate::{
    app::{use_explorer, ExplorerContext},
    controller::ExplorerAction,
    debounce::Debouncer,
    dialog::DialogRequest,
};

fn upload(ctx: ExplorerContext) {
    let transfer = ctx.transfer.get_value();
    spawn_local(async move {
        match transfer.pick_files().await {
            Ok(files) => ctx.dispatch_action(ExplorerAction::UploadFiles(files)),
            Err(err) => {
                logging::warn!("explorer upload failed: {err}");
                ctx.notice.set(Some(format!("Upload failed: {err}")));
            }
        }
    });
}

#[component]
/// New folder / Upload actions and the search box.
pub fn ExplorerToolbar() -> impl IntoView {
    let ctx = use_explorer();
    let search_text = create_rw_signal(String::new());
    let search_debounce = Debouncer::new(ctx.config.with_value(|config| config.search_debounce()));

    let new_folder = move |_: MouseEvent| {
        let parent = ctx.view.with_untracked(|view| view.cursor.selected_folder);
        ctx.dialog.set(Some(DialogRequest::CreateFolder {
            parent: Some(parent),
        }));
    };
    let on_search_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        search_text.set(text.clone());
        search_debounce.schedule(move || ctx.dispatch_action(ExplorerAction::SetSearchQuery(text)));
    };
    let clear_search = move |_: MouseEvent| {
        search_debounce.cancel();
        search_text.set(String::new());
        ctx.dispatch_action(ExplorerAction::SetSearchQuery(String::new()));
    };

    view! {
        <ToolBar layout_class="explorer-toolbar" aria_label="Explorer actions">
            <Button variant=ButtonVariant::Primary on_click=Callback::new(new_folder)>
                "+ New folder"
            </Button>
            <Button on_click=Callback::new(move |_| upload(ctx))>"+ Upload"</Button>
            <div class="explorer-search" data-ui-slot="search">
                <TextField
                    input_type="search"
                    placeholder="Search files and folders"
                    aria_label="Search"
                    ui_slot="search-input"
                    value=search_text
                    on_input=Callback::new(on_search_input)
                />
                <Show when=move || search_text.with(|text| !text.is_empty()) fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        aria_label="Clear search"
                        on_click=Callback::new(clear_search)
                    >
                        "✕"
                    </Button>
                </Show>
            </div>
        </ToolBar>
    }
}

#[component]
/// Full path of the selection with an "up one level" control.
pub fn PathBar() -> impl IntoView {
    let ctx = use_explorer();
    let path = create_memo(move |_| ctx.tree.with(|root| ctx.view.with(|view| view.display_path(root))));
    let can_go_up = create_memo(move |_| ctx.tree.with(|root| ctx.view.with(|view| view.can_go_up(root))));

    view! {
        <ToolBar layout_class="explorer-path-bar" aria_label="Current path">
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                aria_label="Up one level"
                title="Up one level"
                disabled=Signal::derive(move || !can_go_up.get())
                on_click=Callback::new(move |_| ctx.dispatch_action(ExplorerAction::GoToParent))
            >
                "↑"
            </Button>
            <Text role=TextRole::Code ui_slot="path">{path}</Text>
        </ToolBar>
    }
}

#[component]
/// Tree totals and the latest notice.
pub fn ExplorerStatusBar() -> impl IntoView {
    let ctx = use_explorer();
    let totals = create_memo(move |_| {
        let counts = ctx.tree.with(|root| root.counts());
        format!("{} folder(s), {} file(s)", counts.folders, counts.files)
    });
    let notice = Signal::derive(move || ctx.notice.get().unwrap_or_default());

    view! { <StatusBar summary=totals notice=notice /> }
}
