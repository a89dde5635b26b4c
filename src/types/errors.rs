use thiserror::Error;

use super::bookmark::BookmarkId;

// === StoreError ===

/// Failures reported by the authoritative bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered but refused the operation.
    #[error("Bookmark store rejected request: status {status}")]
    Rejected { status: u16 },
    /// The store could not be reached.
    #[error("Bookmark store network error: {0}")]
    Network(String),
    /// The store's answer could not be decoded.
    #[error("Bookmark store returned malformed data: {0}")]
    Malformed(String),
}

// === MutationError ===

/// Errors returned by mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The store failed; forwarded as-is.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Another mutation on the same bookmark has not finished yet.
    #[error("Mutation already in flight for bookmark: {0}")]
    InFlight(BookmarkId),
}

// === SelectionError ===

/// Errors related to bulk selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The bookmark is not part of the list.
    #[error("Bookmark not in list: {0}")]
    NotInList(BookmarkId),
}

// === ClickError ===

/// Errors raised while routing a click.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClickError {
    /// The checkbox carried an id that matches no bookmark.
    #[error("Unknown bookmark: {0}")]
    UnknownBookmark(String),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(String),
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
