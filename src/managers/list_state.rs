//! The list and its selection under one owner.
//!
//! Every way a row can leave the list goes through here, so the selection
//! never names a bookmark that is not listed.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::managers::list_content::ListContent;
use crate::managers::selection_manager::{SelectionManagerTrait, SelectionState};
use crate::types::bookmark::{Bookmark, BookmarkId};

/// List rows plus bulk selection.
#[derive(Default)]
pub struct ListState {
    content: ListContent,
    selection: SelectionState,
}

/// Shared handle used by the router and the mutation service.
pub type SharedListState = Arc<Mutex<ListState>>;

impl ListState {
    pub fn new(content: ListContent) -> Self {
        Self {
            content,
            selection: SelectionState::new(),
        }
    }

    pub fn shared(self) -> SharedListState {
        Arc::new(Mutex::new(self))
    }

    pub fn content(&self) -> &ListContent {
        &self.content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Borrows the list immutably and the selection mutably at once.
    pub fn split_mut(&mut self) -> (&ListContent, &mut SelectionState) {
        (&self.content, &mut self.selection)
    }

    /// Removes a row and any selection reference to it.
    pub fn remove_bookmark(&mut self, id: &BookmarkId) -> Option<Bookmark> {
        let removed = self.content.remove(id)?;
        self.selection.prune(&self.content);
        Some(removed)
    }

    /// Swaps in freshly fetched rows, keeping still-listed selections.
    pub fn replace_content(&mut self, content: ListContent) {
        self.content = content;
        let dropped = self.selection.prune(&self.content);
        log::debug!(
            "list replaced with {} rows, {} stale selections dropped",
            self.content.len(),
            dropped
        );
    }

    pub fn set_reminder_at(&mut self, id: &BookmarkId, reminder_at: Option<DateTime<Utc>>) -> bool {
        self.content.set_reminder_at(id, reminder_at)
    }
}

/// Locks shared state, recovering the data from a poisoned lock.
pub fn lock_state(state: &SharedListState) -> MutexGuard<'_, ListState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
