//! Mutation Service for the bookmark list.
//!
//! Runs remove / edit / clear-reminder / toggle-pin against a single
//! bookmark and keeps the in-memory list consistent with the outcome:
//!
//! - remove: optional confirmation, delete, announce, then drop the row.
//! - edit: hand a snapshot to the editing surface; on save announce then
//!   reload, on delete reload.
//! - clear reminder: update, then patch `reminder_at` in place.
//! - toggle pin: update, then reload.
//!
//! Nothing is changed locally before the store confirms. Store failures are
//! returned unchanged and leave the list as it was.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::managers::list_content::ListContent;
use crate::managers::list_state::{lock_state, SharedListState};
use crate::services::collaborators::{BookmarkStore, Confirmer, EditorSurface, EventPublisher};
use crate::types::bookmark::{Bookmark, BookmarkFormData, BookmarkId};
use crate::types::errors::MutationError;
use crate::types::events::{BookmarkEvent, Confirmation, EditOutcome};
use crate::types::settings::ListSettings;

/// Trait defining bookmark mutation operations.
#[async_trait]
pub trait MutationServiceTrait {
    /// Resolves `false` if the user declined the confirmation.
    async fn remove_bookmark(&self, bookmark: &Bookmark) -> Result<bool, MutationError>;
    async fn edit_bookmark(&self, bookmark: &Bookmark) -> Result<EditOutcome, MutationError>;
    async fn after_save(&self, bookmark: &Bookmark, saved: BookmarkFormData) -> Result<(), MutationError>;
    async fn after_delete(&self) -> Result<(), MutationError>;
    async fn clear_reminder(&self, bookmark: &Bookmark) -> Result<(), MutationError>;
    async fn toggle_pin(&self, bookmark: &Bookmark) -> Result<(), MutationError>;
    async fn reload(&self) -> Result<(), MutationError>;
}

/// Mutation service bound to one list.
pub struct MutationService {
    state: SharedListState,
    store: Arc<dyn BookmarkStore>,
    confirmer: Arc<dyn Confirmer>,
    editor: Arc<dyn EditorSurface>,
    publisher: Arc<dyn EventPublisher>,
    confirm_delete_message: String,
    guard_concurrent: bool,
    in_flight: Mutex<HashSet<BookmarkId>>,
}

/// Marks a bookmark busy until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<BookmarkId>>,
    id: BookmarkId,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        match self.set.lock() {
            Ok(mut set) => {
                set.remove(&self.id);
            }
            Err(poisoned) => {
                poisoned.into_inner().remove(&self.id);
            }
        }
    }
}

impl MutationService {
    pub fn new(
        state: SharedListState,
        store: Arc<dyn BookmarkStore>,
        confirmer: Arc<dyn Confirmer>,
        editor: Arc<dyn EditorSurface>,
        publisher: Arc<dyn EventPublisher>,
        settings: &ListSettings,
    ) -> Self {
        Self {
            state,
            store,
            confirmer,
            editor,
            publisher,
            confirm_delete_message: settings.confirm_delete_message.clone(),
            guard_concurrent: settings.guard_concurrent_mutations,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Claims `id` for one mutation. `None` when guarding is off.
    fn begin(&self, id: BookmarkId) -> Result<Option<InFlight<'_>>, MutationError> {
        if !self.guard_concurrent {
            return Ok(None);
        }
        let inserted = match self.in_flight.lock() {
            Ok(mut set) => set.insert(id),
            Err(poisoned) => poisoned.into_inner().insert(id),
        };
        if !inserted {
            log::warn!("rejecting concurrent mutation of bookmark {}", id);
            return Err(MutationError::InFlight(id));
        }
        Ok(Some(InFlight {
            set: &self.in_flight,
            id,
        }))
    }

    pub fn is_in_flight(&self, id: &BookmarkId) -> bool {
        match self.in_flight.lock() {
            Ok(set) => set.contains(id),
            Err(poisoned) => poisoned.into_inner().contains(id),
        }
    }
}

#[async_trait]
impl MutationServiceTrait for MutationService {
    async fn remove_bookmark(&self, bookmark: &Bookmark) -> Result<bool, MutationError> {
        let _busy = self.begin(bookmark.id)?;

        if bookmark.needs_delete_confirmation() {
            if let Confirmation::Cancelled = self.confirmer.confirm(&self.confirm_delete_message).await {
                log::debug!("removal of bookmark {} cancelled", bookmark.id);
                return Ok(false);
            }
        }

        if let Err(e) = self.store.delete_bookmark(bookmark.id).await {
            log::warn!("failed to delete bookmark {}: {}", bookmark.id, e);
            return Err(e.into());
        }

        // Listeners may still look the row up, so announce before dropping it.
        self.publisher.publish(BookmarkEvent::Changed {
            payload: None,
            target: bookmark.attached_to.clone(),
        });
        let removed = lock_state(&self.state).remove_bookmark(&bookmark.id);
        if removed.is_none() {
            log::warn!("deleted bookmark {} was not listed", bookmark.id);
        }

        log::info!("removed bookmark {}", bookmark.id);
        Ok(true)
    }

    async fn edit_bookmark(&self, bookmark: &Bookmark) -> Result<EditOutcome, MutationError> {
        let outcome = self.editor.edit(BookmarkFormData::from(bookmark)).await;
        match &outcome {
            EditOutcome::Saved(saved) => self.after_save(bookmark, saved.clone()).await?,
            EditOutcome::Deleted => self.after_delete().await?,
            EditOutcome::Dismissed => log::debug!("edit of bookmark {} dismissed", bookmark.id),
        }
        Ok(outcome)
    }

    async fn after_save(&self, bookmark: &Bookmark, saved: BookmarkFormData) -> Result<(), MutationError> {
        self.publisher.publish(BookmarkEvent::Changed {
            payload: Some(saved),
            target: bookmark.attached_to.clone(),
        });
        self.reload().await
    }

    async fn after_delete(&self) -> Result<(), MutationError> {
        self.reload().await
    }

    async fn clear_reminder(&self, bookmark: &Bookmark) -> Result<(), MutationError> {
        let _busy = self.begin(bookmark.id)?;

        if let Err(e) = self.store.clear_reminder(bookmark.id).await {
            log::warn!("failed to clear reminder of bookmark {}: {}", bookmark.id, e);
            return Err(e.into());
        }

        if !lock_state(&self.state).set_reminder_at(&bookmark.id, None) {
            log::warn!("cleared reminder of unlisted bookmark {}", bookmark.id);
        }
        log::info!("cleared reminder of bookmark {}", bookmark.id);
        Ok(())
    }

    async fn toggle_pin(&self, bookmark: &Bookmark) -> Result<(), MutationError> {
        let _busy = self.begin(bookmark.id)?;

        if let Err(e) = self.store.toggle_pin(bookmark.id).await {
            log::warn!("failed to toggle pin of bookmark {}: {}", bookmark.id, e);
            return Err(e.into());
        }
        log::info!("toggled pin of bookmark {}", bookmark.id);
        self.reload().await
    }

    /// Refetches the whole list and replaces the local rows.
    async fn reload(&self) -> Result<(), MutationError> {
        let rows = self.store.load_bookmarks().await?;
        lock_state(&self.state).replace_content(ListContent::from_bookmarks(rows));
        Ok(())
    }
}
