//! Explorer root component, shared context, and the dispatch loop.

use std::rc::Rc;

use explorer_store::{Folder, TreePersistence, TreeStore};
use leptos::*;
use platform_host::{FileTransferService, NoopSnapshotStorage, SnapshotStorage};
use platform_host_web::{snapshot_storage, WebFileTransferService};

use crate::{
    config::ExplorerConfig,
    controller::{reduce_explorer, ExplorerAction, ExplorerEffect, ExplorerViewState},
    debounce::Debouncer,
    dialog::{DialogHost, DialogRequest},
    overlays::{ContextMenuHost, TooltipHost, TooltipState},
    preview::PreviewPane,
    search_panel::SearchPanel,
    toolbar::{ExplorerStatusBar, ExplorerToolbar, PathBar},
    tree_view::TreeView,
};
use explorer_ui::{PaneSlot, Workspace, WorkspacePane};

#[derive(Clone, Copy)]
/// Leptos context shared by every explorer view.
pub struct ExplorerContext {
    /// The tree store. Only [`ExplorerContext::dispatch`] mutates it.
    pub store: StoredValue<TreeStore>,
    /// Snapshot of the tree, refreshed by the store subscription after every mutation.
    pub tree: RwSignal<Folder>,
    /// Selection cursor, expansion, context menu, and settled search query.
    pub view: RwSignal<ExplorerViewState>,
    /// Effects waiting for the executor.
    pub effects: RwSignal<Vec<ExplorerEffect>>,
    /// Open modal dialog.
    pub dialog: RwSignal<Option<DialogRequest>>,
    /// Visible tooltip.
    pub tooltip: RwSignal<Option<TooltipState>>,
    /// Latest status bar message.
    pub notice: RwSignal<Option<String>>,
    /// Upload/download host service.
    pub transfer: StoredValue<Rc<dyn FileTransferService>>,
    /// Settings this instance was opened with.
    pub config: StoredValue<ExplorerConfig>,
    /// Delayed tooltip hide.
    pub tooltip_hide: Debouncer,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ExplorerAction>,
}

impl ExplorerContext {
    /// Dispatches a controller action.
    pub fn dispatch_action(&self, action: ExplorerAction) {
        self.dispatch.call(action);
    }

    /// Shows `text` at the given viewport position and cancels a pending hide.
    pub fn show_tooltip(&self, text: String, (x, y): (i32, i32)) {
        self.tooltip_hide.cancel();
        self.tooltip.set(Some(TooltipState { text, x, y }));
    }

    /// Hides the tooltip after the configured delay.
    pub fn schedule_tooltip_hide(&self) {
        let tooltip = self.tooltip;
        self.tooltip_hide.schedule(move || tooltip.set(None));
    }
}

/// Returns the current [`ExplorerContext`].
///
/// # Panics
///
/// Panics if called outside [`ExplorerApp`].
pub fn use_explorer() -> ExplorerContext {
    use_context::<ExplorerContext>().expect("ExplorerContext not provided")
}

/// Builds the tree store described by `config`, restoring from browser storage when enabled.
///
/// With persistence off the store writes through to [`NoopSnapshotStorage`].
pub fn open_store(config: &ExplorerConfig) -> TreeStore {
    let storage: Rc<dyn SnapshotStorage> = if config.persist {
        snapshot_storage()
    } else {
        Rc::new(NoopSnapshotStorage)
    };
    let persistence = TreePersistence::with_key(storage, config.storage_key.clone());
    TreeStore::open(persistence, config.seed_demo_data)
}

fn run_effect(ctx: ExplorerContext, effect: ExplorerEffect) {
    match effect {
        ExplorerEffect::SimulateLoad(id) => {
            let delay = ctx.config.with_value(ExplorerConfig::lazy_load_delay);
            set_timeout(
                move || ctx.dispatch_action(ExplorerAction::FinishLoad(id)),
                delay,
            );
        }
        ExplorerEffect::Notice(message) => {
            logging::log!("explorer: {message}");
            ctx.notice.set(Some(message));
        }
    }
}

fn install_effect_executor(ctx: ExplorerContext) {
    create_effect(move |_| {
        let queued = ctx.effects.get();
        if queued.is_empty() {
            return;
        }

        ctx.effects.set(Vec::new());

        for effect in queued {
            run_effect(ctx, effect);
        }
    });
}

fn install_dismiss_listeners(ctx: ExplorerContext) {
    let handle = window_event_listener(ev::click, move |_| {
        ctx.tooltip_hide.cancel();
        ctx.tooltip.set(None);
        if ctx.view.with_untracked(|view| view.context_menu.is_some()) {
            ctx.dispatch_action(ExplorerAction::CloseContextMenu);
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
/// Complete explorer: toolbar, path bar, tree, search results, preview, and overlays.
pub fn ExplorerApp(
    /// Runtime settings; defaults when omitted.
    #[prop(optional)]
    config: Option<ExplorerConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let mut tree_store = open_store(&config);
    let tree = create_rw_signal(tree_store.root().clone());
    tree_store.subscribe(move |_, root| tree.set(root.clone()));

    let view_state = create_rw_signal(ExplorerViewState::new(tree_store.root_id()));
    let store = store_value(tree_store);
    let effects = create_rw_signal(Vec::<ExplorerEffect>::new());
    let notice = create_rw_signal(None::<String>);
    let tooltip_hide = Debouncer::new(config.tooltip_hide_delay());
    let transfer: Rc<dyn FileTransferService> = Rc::new(WebFileTransferService);

    let dispatch = Callback::new(move |action: ExplorerAction| {
        batch(move || {
            let mut next = view_state.get_untracked();
            let outcome = store.try_update_value(|store| reduce_explorer(store, &mut next, action));
            match outcome {
                Some(Ok(new_effects)) => {
                    if view_state.with_untracked(|current| *current != next) {
                        view_state.set(next);
                    }
                    if !new_effects.is_empty() {
                        effects.update(|queue| queue.extend(new_effects));
                    }
                }
                Some(Err(err)) => {
                    logging::warn!("explorer action failed: {err}");
                    notice.set(Some(err.to_string()));
                }
                None => logging::warn!("explorer action dropped: store disposed"),
            }
        })
    });

    let ctx = ExplorerContext {
        store,
        tree,
        view: view_state,
        effects,
        dialog: create_rw_signal(None),
        tooltip: create_rw_signal(None),
        notice,
        transfer: store_value(transfer),
        config: store_value(config),
        tooltip_hide,
        dispatch,
    };
    provide_context(ctx);
    install_effect_executor(ctx);
    install_dismiss_listeners(ctx);

    view! {
        <div class="explorer-app" data-ui-kind="explorer">
            <ExplorerToolbar />
            <PathBar />
            <Workspace>
                <WorkspacePane r#slot=PaneSlot::Sidebar>
                    <SearchPanel />
                    <TreeView />
                </WorkspacePane>
                <WorkspacePane r#slot=PaneSlot::Preview>
                    <PreviewPane />
                </WorkspacePane>
            </Workspace>
            <ExplorerStatusBar />
            <ContextMenuHost />
            <TooltipHost />
            <DialogHost />
        </div>
    }
}
