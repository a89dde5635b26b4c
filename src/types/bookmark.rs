use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned bookmark identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(pub i64);

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(BookmarkId)
    }
}

/// The entity a bookmark was created on (a post, a topic, ...).
///
/// Never interpreted here, only forwarded in notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedTo {
    pub target: String,
    pub target_id: i64,
}

/// When the server should delete a bookmark on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AutoDeletePreference {
    #[default]
    Never,
    WhenReminderSent,
    OnOwnerReply,
    ClearReminder,
}

impl TryFrom<u8> for AutoDeletePreference {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Never),
            1 => Ok(Self::WhenReminderSent),
            2 => Ok(Self::OnOwnerReply),
            3 => Ok(Self::ClearReminder),
            other => Err(format!("unknown auto delete preference: {}", other)),
        }
    }
}

impl From<AutoDeletePreference> for u8 {
    fn from(pref: AutoDeletePreference) -> u8 {
        match pref {
            AutoDeletePreference::Never => 0,
            AutoDeletePreference::WhenReminderSent => 1,
            AutoDeletePreference::OnOwnerReply => 2,
            AutoDeletePreference::ClearReminder => 3,
        }
    }
}

/// A bookmark row as rendered in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub reminder_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub auto_delete_preference: AutoDeletePreference,
    pub attached_to: AttachedTo,
}

impl Bookmark {
    /// Removing a bookmark with a pending reminder needs the user's consent.
    pub fn needs_delete_confirmation(&self) -> bool {
        self.reminder_at.is_some()
    }
}

/// Editable fields handed to the editing surface, and returned by it on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkFormData {
    pub id: BookmarkId,
    pub name: Option<String>,
    pub reminder_at: Option<DateTime<Utc>>,
    pub auto_delete_preference: AutoDeletePreference,
    pub attached_to: AttachedTo,
}

impl From<&Bookmark> for BookmarkFormData {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            name: bookmark.name.clone(),
            reminder_at: bookmark.reminder_at,
            auto_delete_preference: bookmark.auto_delete_preference,
            attached_to: bookmark.attached_to.clone(),
        }
    }
}
