use super::*;

fn anchor_style(x: i32, y: i32) -> String {
    format!("left: {x}px; top: {y}px;")
}

#[component]
/// Context menu positioned at viewport coordinates. Clicks inside do not bubble out.
pub fn MenuSurface(
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(into)] x: MaybeSignal<i32>,
    #[prop(into)] y: MaybeSignal<i32>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-menu-surface"
            role="menu"
            aria-label=aria_label
            style=move || anchor_style(x.get(), y.get())
            data-ui-kind="menu-surface"
            on:click=|ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry. `danger` styles destructive entries.
pub fn MenuItem(
    #[prop(optional)] danger: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Quiet
    };
    view! {
        <Button
            role="menuitem"
            ui_slot="menu-item"
            variant=variant
            on_click=Callback::new(move |ev| call_optional(on_click.as_ref(), ev))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Modal dialog over a full-viewport backdrop.
///
/// Clicking the backdrop calls `on_dismiss`; clicks inside the dialog do not reach it. The dialog
/// surface is focusable and receives `on_keydown` for every key pressed inside it, so keyboard
/// shortcuts work whether or not a field has focus.
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let aria_title = title.clone();
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-kind="modal-backdrop"
            on:click=move |_| call_optional(on_dismiss.as_ref(), ())
        >
            <div
                class="ui-modal"
                role="dialog"
                aria-modal="true"
                aria-label=move || aria_title.get()
                tabindex="-1"
                node_ref=node_ref
                data-ui-kind="modal"
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:keydown=move |ev| call_optional(on_keydown.as_ref(), ev)
            >
                <header data-ui-slot="header">
                    <Text role=TextRole::Title>{move || title.get()}</Text>
                </header>
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Description bubble anchored at viewport coordinates.
///
/// Hovering the bubble itself is reported so the host can keep it open.
pub fn TooltipSurface(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(into)] x: MaybeSignal<i32>,
    #[prop(into)] y: MaybeSignal<i32>,
    #[prop(optional)] on_mouseenter: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouseleave: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-tooltip"
            role="tooltip"
            style=move || anchor_style(x.get(), y.get())
            data-ui-kind="tooltip"
            on:mouseenter=move |ev| call_optional(on_mouseenter.as_ref(), ev)
            on:mouseleave=move |ev| call_optional(on_mouseleave.as_ref(), ev)
        >
            {move || text.get()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::anchor_style;

    #[test]
    fn anchor_style_places_overlay_in_pixels() {
        assert_eq!(anchor_style(12, -4), "left: 12px; top: -4px;");
    }
}
