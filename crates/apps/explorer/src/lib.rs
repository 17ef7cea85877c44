//! Browser file explorer: tree sidebar, search, preview, and the controller that ties them to
//! the [`explorer_store::TreeStore`].
//!
//! Views never mutate the store directly. They dispatch [`ExplorerAction`]s through the
//! [`ExplorerContext`], and [`reduce_explorer`] applies them.

#![warn(rustdoc::broken_intra_doc_links)]

mod app;
pub mod config;
pub mod controller;
mod debounce;
mod dialog;
mod overlays;
mod preview;
mod search_panel;
mod toolbar;
mod tree_view;

pub use app::{open_store, use_explorer, ExplorerApp, ExplorerContext};
pub use config::ExplorerConfig;
pub use controller::{
    reduce_explorer, ContextMenuState, ControllerError, EntryTarget, ExplorerAction,
    ExplorerCursor, ExplorerEffect, ExplorerViewState,
};
pub use dialog::DialogRequest;
pub use preview::{FilePreviewModel, PreviewModel};
pub use search_panel::{search_rows, SearchRow};
