use serde::{Deserialize, Serialize};

use super::bookmark::{AttachedTo, BookmarkFormData, BookmarkId};
use super::settings::Capabilities;

/// Topic every bookmark mutation is announced under.
pub const BOOKMARKS_CHANGED: &str = "bookmarks:changed";

/// A broadcast announcing that a bookmark changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookmarkEvent {
    /// `payload` is `None` when the bookmark was deleted.
    Changed {
        payload: Option<BookmarkFormData>,
        target: AttachedTo,
    },
}

impl BookmarkEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            BookmarkEvent::Changed { .. } => BOOKMARKS_CHANGED,
        }
    }
}

/// Answer of the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// How the editing surface was closed.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Saved(BookmarkFormData),
    Deleted,
    Dismissed,
}

/// Point-in-time view of the selection, sent to observers on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub bulk_select_enabled: bool,
    pub selected: Vec<BookmarkId>,
}

impl SelectionSnapshot {
    pub fn can_bulk_act(&self, capabilities: &Capabilities) -> bool {
        capabilities.can_manage_list && !self.selected.is_empty()
    }
}

/// The UI element a click originated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickTarget {
    BulkSelectToggle,
    /// `bookmark_id` is the raw id carried by the checkbox element.
    RowCheckbox { bookmark_id: String, checked: bool },
    ContentLink { href: String },
    Other,
}

/// A raw interaction event from the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub target: ClickTarget,
    #[serde(default)]
    pub shift_key: bool,
}

impl ClickEvent {
    pub fn new(target: ClickTarget) -> Self {
        Self {
            target,
            shift_key: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }
}

/// What the host must do after a click was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Rerender,
    SelectionChanged,
    OpenedInNewTab,
    DefaultNavigation,
    Ignored,
}
