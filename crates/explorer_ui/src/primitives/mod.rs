//! Explorer chrome primitives and the tokens they render.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod entries;
mod overlays;
mod panes;

pub use controls::{Button, TextArea, TextField};
pub use entries::{DisclosureToggle, EntryButton, EntryRow, Tree};
pub use overlays::{MenuItem, MenuSurface, Modal, TooltipSurface};
pub use panes::{
    ActionRow, EmptyState, PaneHeader, PreviewFrame, StatusBar, Text, ToolBar, Workspace,
    WorkspacePane,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Toolbar and preview actions.
    #[default]
    Standard,
    /// The action a dialog or editor is for.
    Primary,
    /// Borderless row, menu, and icon buttons.
    Quiet,
    /// Delete.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Button density.
pub enum ButtonSize {
    /// Tree rows, path bar, and inline clear buttons.
    Sm,
    /// Everything else.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Typographic role of a [`Text`] run.
pub enum TextRole {
    /// Body copy.
    #[default]
    Body,
    /// Small secondary lines such as search paths and save state.
    Caption,
    /// Dialog titles.
    Title,
    /// Monospace paths.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Text color.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// Dimmed foreground for hints and notices.
    Secondary,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The two columns of the explorer workspace.
pub enum PaneSlot {
    /// Search results above the folder tree.
    Sidebar,
    /// Folder listing or file viewer.
    Preview,
}

impl PaneSlot {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Preview => "preview",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Sidebar => "Folders",
            Self::Preview => "Preview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a [`PreviewFrame`] holds; drives its sizing rules.
pub enum PreviewMedia {
    /// Scaled-to-fit `<img>`.
    Image,
    /// `<audio>` player.
    Audio,
    /// `<video>` player.
    Video,
    /// Full-height document frame.
    Pdf,
    /// Text editor.
    Text,
    /// "Preview unavailable" notice.
    Unsupported,
}

impl PreviewMedia {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Unsupported => "unsupported",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn call_optional<T: 'static>(callback: Option<&Callback<T>>, value: T) {
    if let Some(callback) = callback {
        callback.call(value);
    }
}
