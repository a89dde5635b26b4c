//! Bulk selection state for the bookmark list.
//!
//! Tracks whether bulk-select mode is on, which rows are selected, and the
//! anchor row used for shift-click ranges. Every change is pushed to
//! observers as a [`SelectionSnapshot`] over a `watch` channel.

use tokio::sync::watch;

use crate::managers::list_content::ListContent;
use crate::managers::selection_range::inclusive_index_range;
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::SelectionError;
use crate::types::events::SelectionSnapshot;
use crate::types::settings::Capabilities;

/// Trait defining bulk selection operations.
pub trait SelectionManagerTrait {
    fn toggle_bulk_select(&mut self);
    fn set_checked(
        &mut self,
        content: &ListContent,
        id: BookmarkId,
        checked: bool,
        range_modifier: bool,
    ) -> Result<(), SelectionError>;
    fn clear(&mut self);
    fn prune(&mut self, content: &ListContent) -> usize;
    fn is_bulk_select_enabled(&self) -> bool;
    fn is_selected(&self, id: &BookmarkId) -> bool;
    fn selected_ids(&self) -> &[BookmarkId];
    fn last_checked(&self) -> Option<BookmarkId>;
    fn can_bulk_act(&self, capabilities: &Capabilities) -> bool;
}

/// Selection state. `selected` keeps first-checked order and has no duplicates.
pub struct SelectionState {
    bulk_select_enabled: bool,
    selected: Vec<BookmarkId>,
    last_checked: Option<BookmarkId>,
    notifier: watch::Sender<SelectionSnapshot>,
}

impl SelectionState {
    pub fn new() -> Self {
        let (notifier, _) = watch::channel(SelectionSnapshot::default());
        Self {
            bulk_select_enabled: false,
            selected: Vec::new(),
            last_checked: None,
            notifier,
        }
    }

    /// Receives a snapshot after every change to the selection or the mode.
    pub fn subscribe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.notifier.subscribe()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            bulk_select_enabled: self.bulk_select_enabled,
            selected: self.selected.clone(),
        }
    }

    /// Selected rows in list order.
    pub fn selected_bookmarks<'a>(&self, content: &'a ListContent) -> Vec<&'a Bookmark> {
        content
            .iter()
            .filter(|b| self.is_selected(&b.id))
            .collect()
    }

    fn notify(&self) {
        self.notifier.send_replace(self.snapshot());
    }

    fn insert(&mut self, id: BookmarkId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Checks one row, extending to a range when the modifier is held.
    ///
    /// Rows between the anchor and the clicked row are checked through this
    /// same path, so each one briefly becomes the anchor just like a real
    /// click would make it. The clicked row is the final anchor.
    fn check_row(
        &mut self,
        content: &ListContent,
        id: BookmarkId,
        range_modifier: bool,
    ) -> Result<(), SelectionError> {
        let from = content.index_of(&id).ok_or(SelectionError::NotInList(id))?;
        self.insert(id);

        if range_modifier {
            if let Some(anchor) = self.last_checked {
                match content.index_of(&anchor) {
                    Some(to) => {
                        if let Some(range) = inclusive_index_range(to, from, content.len()) {
                            let pending: Vec<BookmarkId> = content.as_slice()[range]
                                .iter()
                                .map(|b| b.id)
                                .filter(|row| !self.is_selected(row))
                                .collect();
                            for row in pending {
                                self.check_row(content, row, false)?;
                            }
                        }
                    }
                    None => {
                        log::warn!("range anchor {} is no longer listed; dropping it", anchor);
                        self.last_checked = None;
                    }
                }
            }
        }

        self.last_checked = Some(id);
        Ok(())
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionManagerTrait for SelectionState {
    /// Flips bulk-select mode. The selected set is left as it is.
    fn toggle_bulk_select(&mut self) {
        self.bulk_select_enabled = !self.bulk_select_enabled;
        log::debug!("bulk select enabled: {}", self.bulk_select_enabled);
        self.notify();
    }

    fn set_checked(
        &mut self,
        content: &ListContent,
        id: BookmarkId,
        checked: bool,
        range_modifier: bool,
    ) -> Result<(), SelectionError> {
        if checked {
            self.check_row(content, id, range_modifier)?;
        } else {
            self.selected.retain(|selected| *selected != id);
            self.last_checked = None;
        }
        log::debug!("bookmark {} checked={} ({} selected)", id, checked, self.selected.len());
        self.notify();
        Ok(())
    }

    /// Empties the selection and forgets the anchor.
    fn clear(&mut self) {
        self.selected.clear();
        self.last_checked = None;
        self.notify();
    }

    /// Drops selected ids and the anchor when their rows are gone.
    /// Returns how many selected ids were dropped.
    fn prune(&mut self, content: &ListContent) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| {
            let listed = content.contains(id);
            if !listed {
                log::warn!("selection referenced unlisted bookmark {}; dropping it", id);
            }
            listed
        });
        if let Some(anchor) = self.last_checked {
            if !content.contains(&anchor) {
                self.last_checked = None;
            }
        }
        let dropped = before - self.selected.len();
        if dropped > 0 {
            self.notify();
        }
        dropped
    }

    fn is_bulk_select_enabled(&self) -> bool {
        self.bulk_select_enabled
    }

    fn is_selected(&self, id: &BookmarkId) -> bool {
        self.selected.contains(id)
    }

    fn selected_ids(&self) -> &[BookmarkId] {
        &self.selected
    }

    fn last_checked(&self) -> Option<BookmarkId> {
        self.last_checked
    }

    fn can_bulk_act(&self, capabilities: &Capabilities) -> bool {
        capabilities.can_manage_list && !self.selected.is_empty()
    }
}
