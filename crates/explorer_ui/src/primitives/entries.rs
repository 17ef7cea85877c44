//! Folder and file rows shared by the sidebar tree and the search results.

use super::*;

#[component]
/// Root `role="tree"` list.
pub fn Tree(#[prop(optional)] aria_label: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <ul class="ui-tree" role="tree" aria-label=aria_label data-ui-kind="tree">
            {children()}
        </ul>
    }
}

#[component]
/// One tree entry, indented by `depth`.
///
/// `entry` is the `data-ui-entry` token (`folder` or `file`). Leave `expanded` unset for leaves so
/// no `aria-expanded` is rendered.
pub fn EntryRow(
    entry: &'static str,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] expanded: MaybeSignal<Option<bool>>,
    #[prop(optional)] depth: usize,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class="ui-entry-row"
            role="treeitem"
            aria-selected=move || bool_token(selected.get())
            aria-expanded=move || expanded.get().map(bool_token)
            style=format!("--ui-tree-depth: {depth}")
            data-ui-kind="entry-row"
            data-ui-entry=entry
            data-ui-selected=move || bool_token(selected.get())
        >
            {children()}
        </li>
    }
}

#[component]
/// Kind badge, name, and an optional caption line, clickable as a whole.
///
/// Right-click and hover are forwarded so rows can open the context menu and the description
/// tooltip.
pub fn EntryButton(
    badge: &'static str,
    #[prop(into)] name: MaybeSignal<String>,
    #[prop(optional)] detail: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_contextmenu: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouseenter: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouseleave: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-entry-button"
            data-ui-kind="entry-button"
            data-ui-slot=ui_slot
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| call_optional(on_click.as_ref(), ev)
            on:contextmenu=move |ev| call_optional(on_contextmenu.as_ref(), ev)
            on:mouseenter=move |ev| call_optional(on_mouseenter.as_ref(), ev)
            on:mouseleave=move |ev| call_optional(on_mouseleave.as_ref(), ev)
        >
            <span class="ui-badge" data-ui-slot="badge">{badge}</span>
            <span data-ui-slot="name">{move || name.get()}</span>
            {detail.map(|detail| view! { <span data-ui-slot="detail">{detail}</span> })}
        </button>
    }
}

pub(crate) fn disclosure_glyph(expanded: bool) -> &'static str {
    if expanded {
        "↓"
    } else {
        "→"
    }
}

pub(crate) fn disclosure_label(expanded: bool) -> &'static str {
    if expanded {
        "Collapse"
    } else {
        "Expand"
    }
}

#[component]
/// Expand/collapse arrow in front of a folder row.
pub fn DisclosureToggle(
    #[prop(into)] expanded: Signal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-disclosure"
            aria-label=move || disclosure_label(expanded.get())
            aria-expanded=move || bool_token(expanded.get())
            data-ui-kind="disclosure"
            on:click=move |ev| call_optional(on_toggle.as_ref(), ev)
        >
            {move || disclosure_glyph(expanded.get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_reflects_expansion() {
        assert_eq!(
            (disclosure_glyph(false), disclosure_label(false)),
            ("→", "Expand")
        );
        assert_eq!(
            (disclosure_glyph(true), disclosure_label(true)),
            ("↓", "Collapse")
        );
    }
}
