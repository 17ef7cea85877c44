use super::*;

#[component]
/// Push button. `selected` marks the row or tab the button stands for.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] role: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            role=role
            aria-label=move || aria_label.get()
            title=title
            disabled=move || disabled.get()
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| call_optional(on_click.as_ref(), ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Single-line input for the search box and name prompts.
///
/// The value is one-way: `on_input` is expected to write back into `value`.
pub fn TextField(
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class="ui-field"
            placeholder=placeholder
            aria-label=aria_label
            node_ref=node_ref
            autocomplete="off"
            spellcheck="false"
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            on:input=move |ev| call_optional(on_input.as_ref(), ev)
            on:keydown=move |ev| call_optional(on_keydown.as_ref(), ev)
        />
    }
}

#[component]
/// Multi-line editor for text file contents.
pub fn TextArea(
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class="ui-textarea"
            aria-label=aria_label
            spellcheck="false"
            autocomplete="off"
            prop:value=move || value.get()
            data-ui-kind="text-area"
            on:input=move |ev| call_optional(on_input.as_ref(), ev)
        ></textarea>
    }
}
