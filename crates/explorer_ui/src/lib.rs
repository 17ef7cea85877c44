//! Leptos primitives for the file explorer chrome.
//!
//! Primitives render `data-ui-kind` plus a few state attributes (`data-ui-selected`,
//! `data-ui-entry`, `data-ui-media`, ...) that the stylesheet targets. Explorer views compose
//! these instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    ActionRow, Button, ButtonSize, ButtonVariant, DisclosureToggle, EmptyState, EntryButton,
    EntryRow, MenuItem, MenuSurface, Modal, PaneHeader, PaneSlot, PreviewFrame, PreviewMedia,
    StatusBar, Text, TextArea, TextField, TextRole, TextTone, ToolBar, TooltipSurface, Tree,
    Workspace, WorkspacePane,
};
