//! Ordered bookmark rows backing the rendered list.
//!
//! Order is render order, and range selection indexes into it.

use chrono::{DateTime, Utc};

use crate::types::bookmark::{Bookmark, BookmarkId};

/// Ordered, id-unique sequence of bookmarks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListContent {
    bookmarks: Vec<Bookmark>,
}

impl ListContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from fetched rows. Later duplicates of an id are dropped.
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        let mut content = Self::new();
        for bookmark in bookmarks {
            if content.contains(&bookmark.id) {
                log::warn!("dropping duplicate bookmark row {}", bookmark.id);
                continue;
            }
            content.bookmarks.push(bookmark);
        }
        content
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    pub fn ids(&self) -> Vec<BookmarkId> {
        self.bookmarks.iter().map(|b| b.id).collect()
    }

    pub fn contains(&self, id: &BookmarkId) -> bool {
        self.index_of(id).is_some()
    }

    /// Logical position of a row.
    pub fn index_of(&self, id: &BookmarkId) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == *id)
    }

    pub fn get(&self, id: &BookmarkId) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == *id)
    }

    /// Resolves the string id carried by a rendered checkbox.
    pub fn find_by_raw_id(&self, raw: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id.to_string() == raw.trim())
    }

    /// Removes a row, returning it if it was present.
    pub(crate) fn remove(&mut self, id: &BookmarkId) -> Option<Bookmark> {
        let index = self.index_of(id)?;
        Some(self.bookmarks.remove(index))
    }

    /// Patches `reminder_at` in place. Returns false if the row is gone.
    pub(crate) fn set_reminder_at(&mut self, id: &BookmarkId, reminder_at: Option<DateTime<Utc>>) -> bool {
        match self.bookmarks.iter_mut().find(|b| b.id == *id) {
            Some(bookmark) => {
                bookmark.reminder_at = reminder_at;
                true
            }
            None => false,
        }
    }
}
