//! Workspace layout, bars, and the preview surface.

use super::*;

#[component]
/// Styled text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Sidebar and preview columns side by side.
pub fn Workspace(children: Children) -> impl IntoView {
    view! {
        <div class="ui-workspace" data-ui-kind="workspace">
            {children()}
        </div>
    }
}

#[component]
/// One workspace column, labelled for assistive tech by its slot.
pub fn WorkspacePane(slot: PaneSlot, children: Children) -> impl IntoView {
    view! {
        <section
            class="ui-pane"
            aria-label=slot.label()
            data-ui-kind="pane"
            data-ui-slot=slot.token()
        >
            {children()}
        </section>
    }
}

#[component]
/// Title line with an optional dimmed meta line and trailing actions.
pub fn PaneHeader(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let meta_for_check = meta.clone();
    let has_meta = Signal::derive(move || meta_for_check.with(|meta| !meta.is_empty()));
    view! {
        <header class="ui-pane-header" data-ui-kind="pane-header">
            <div data-ui-slot="title">{move || title.get()}</div>
            <Show when=move || has_meta.get() fallback=|| ()>
                <div data-ui-slot="meta">{let meta = meta.clone(); move || meta.get()}</div>
            </Show>
            {children.map(|children| view! { <div data-ui-slot="actions">{children()}</div> })}
        </header>
    }
}

#[component]
/// Frame around a file body, sized by what it shows.
pub fn PreviewFrame(media: PreviewMedia, children: Children) -> impl IntoView {
    view! {
        <div class="ui-preview-frame" data-ui-kind="preview-frame" data-ui-media=media.token()>
            {children()}
        </div>
    }
}

#[component]
/// Centered placeholder message.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-empty-state", layout_class) data-ui-kind="empty-state">
            {children()}
        </div>
    }
}

#[component]
/// Tight horizontal group of buttons.
pub fn ActionRow(#[prop(optional)] ui_slot: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="ui-action-row" data-ui-kind="action-row" data-ui-slot=ui_slot>
            {children()}
        </div>
    }
}

#[component]
/// `role="toolbar"` strip.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-kind="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom bar: tree totals on the left, the latest notice on the right.
pub fn StatusBar(
    #[prop(into)] summary: Signal<String>,
    #[prop(into)] notice: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="ui-statusbar" role="status" data-ui-kind="statusbar">
            <span data-ui-slot="summary">{move || summary.get()}</span>
            <span data-ui-slot="notice" data-ui-tone=TextTone::Secondary.token()>
                {move || notice.get()}
            </span>
        </div>
    }
}
