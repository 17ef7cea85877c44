//! Context menu and description tooltip overlays.

use explorer_ui::{MenuItem, MenuSurface, TooltipSurface};
use leptos::{ev::MouseEvent, *};
use wasm_bindgen::JsCast;

use crate::{
    app::{use_explorer, ExplorerContext},
    controller::{EntryTarget, ExplorerAction},
    dialog::DialogRequest,
};

/// Horizontal gap between a hovered row and its tooltip.
const TOOLTIP_OFFSET_X: i32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Visible tooltip.
pub struct TooltipState {
    /// Description shown in the bubble.
    pub text: String,
    /// Viewport x of the anchor, in CSS pixels.
    pub x: i32,
    /// Viewport y of the anchor, in CSS pixels.
    pub y: i32,
}

/// Top-right corner of the element the event's listener is attached to.
///
/// Falls back to the pointer position when the target is not an element.
pub fn row_anchor(ev: &MouseEvent) -> (i32, i32) {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            (rect.right() as i32, rect.top() as i32)
        })
        .unwrap_or_else(|| (ev.client_x(), ev.client_y()))
}

/// Tooltip position for a hovered row.
pub fn tooltip_anchor(ev: &MouseEvent) -> (i32, i32) {
    let (x, y) = row_anchor(ev);
    (x + TOOLTIP_OFFSET_X, y)
}

/// Opens the context menu for `target` beside the row that received `ev`.
pub fn open_context_menu(ctx: ExplorerContext, ev: MouseEvent, target: EntryTarget) {
    ev.prevent_default();
    ev.stop_propagation();
    let (x, y) = row_anchor(&ev);
    ctx.dispatch_action(ExplorerAction::OpenContextMenu { target, x, y });
}

#[component]
/// Add / Rename / Delete menu for the entry under the last right-click.
pub fn ContextMenuHost() -> impl IntoView {
    let ctx = use_explorer();
    let menu = create_memo(move |_| ctx.view.with(|view| view.context_menu));

    move || {
        menu.get().map(|menu| {
            let target = menu.target;
            let add = move |_: MouseEvent| {
                let parent = ctx.view.with_untracked(|view| view.create_target());
                ctx.dispatch_action(ExplorerAction::CloseContextMenu);
                ctx.dialog.set(Some(DialogRequest::CreateFolder {
                    parent: Some(parent),
                }));
            };
            let rename = move |_: MouseEvent| {
                ctx.dispatch_action(ExplorerAction::CloseContextMenu);
                let request = ctx.tree.with_untracked(|root| DialogRequest::rename(target, root));
                ctx.dialog.set(request);
            };
            let delete = move |_: MouseEvent| {
                ctx.dispatch_action(ExplorerAction::CloseContextMenu);
                let request =
                    ctx.tree.with_untracked(|root| DialogRequest::confirm_delete(target, root));
                ctx.dialog.set(Some(request));
            };

            view! {
                <MenuSurface aria_label="Entry actions" x=menu.x y=menu.y>
                    <MenuItem on_click=Callback::new(add)>"Add folder"</MenuItem>
                    <MenuItem on_click=Callback::new(rename)>"Rename"</MenuItem>
                    <MenuItem danger=true on_click=Callback::new(delete)>
                        "Delete"
                    </MenuItem>
                </MenuSurface>
            }
        })
    }
}

#[component]
/// Floating description for the hovered file or search result.
pub fn TooltipHost() -> impl IntoView {
    let ctx = use_explorer();

    move || {
        ctx.tooltip.get().map(|tip| {
            view! {
                <TooltipSurface
                    text=tip.text
                    x=tip.x
                    y=tip.y
                    on_mouseenter=Callback::new(move |_| ctx.tooltip_hide.cancel())
                    on_mouseleave=Callback::new(move |_| ctx.schedule_tooltip_hide())
                />
            }
        })
    }
}
