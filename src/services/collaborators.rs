//! Interfaces to everything the list relies on but does not own.
//!
//! The store is the authoritative source of bookmarks; the confirmer and the
//! editor are UI surfaces; the link opener hands URLs to the host.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::bookmark::{Bookmark, BookmarkFormData, BookmarkId};
use crate::types::errors::StoreError;
use crate::types::events::{BookmarkEvent, Confirmation, EditOutcome};

/// Network operations against the bookmark store.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn delete_bookmark(&self, id: BookmarkId) -> Result<(), StoreError>;

    /// Clears the reminder on the server side.
    async fn clear_reminder(&self, id: BookmarkId) -> Result<(), StoreError>;

    async fn toggle_pin(&self, id: BookmarkId) -> Result<(), StoreError>;

    /// Fetches the full list in render order.
    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError>;
}

/// The confirmation dialog.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, message: &str) -> Confirmation;
}

/// The bookmark editing surface. Resolves once the user closes it.
#[async_trait]
pub trait EditorSurface: Send + Sync {
    async fn edit(&self, form: BookmarkFormData) -> EditOutcome;
}

/// Fire-and-forget publish channel.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: BookmarkEvent);
}

/// Opens links outside the current view.
pub trait LinkOpener: Send + Sync {
    fn open_in_new_tab(&self, href: &str);
}

/// Every external collaborator a bookmark list is wired to.
#[derive(Clone)]
pub struct Collaborators {
    pub store: Arc<dyn BookmarkStore>,
    pub confirmer: Arc<dyn Confirmer>,
    pub editor: Arc<dyn EditorSurface>,
    pub link_opener: Arc<dyn LinkOpener>,
}
