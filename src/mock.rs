//! In-memory collaborators for tests and the demo binary.
//!
//! Each mock records the calls it receives and can be configured to fail
//! or to answer in a fixed way.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::managers::list_state::{lock_state, SharedListState};
use crate::services::collaborators::{
    BookmarkStore, Collaborators, Confirmer, EditorSurface, EventPublisher, LinkOpener,
};
use crate::types::bookmark::{AttachedTo, Bookmark, BookmarkFormData, BookmarkId};
use crate::types::errors::StoreError;
use crate::types::events::{BookmarkEvent, Confirmation, EditOutcome};

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Builds a bookmark on a post, with an optional RFC 3339 reminder.
pub fn sample_bookmark(id: i64, reminder_at: Option<&str>) -> Bookmark {
    Bookmark {
        id: BookmarkId(id),
        name: None,
        title: format!("Topic {}", id),
        excerpt: None,
        reminder_at: reminder_at
            .and_then(|at| DateTime::parse_from_rfc3339(at).ok())
            .map(|at| at.with_timezone(&Utc)),
        pinned: false,
        auto_delete_preference: Default::default(),
        attached_to: AttachedTo {
            target: "post".to_string(),
            target_id: id * 100,
        },
    }
}

/// A recorded call to the mock store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Delete(BookmarkId),
    ClearReminder(BookmarkId),
    TogglePin(BookmarkId),
    Load,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StoreOp {
    Delete,
    ClearReminder,
    TogglePin,
    Load,
}

/// Server-side bookmark rows held in memory.
pub struct InMemoryBookmarkStore {
    rows: Mutex<Vec<Bookmark>>,
    calls: Mutex<Vec<StoreCall>>,
    errors: Mutex<HashMap<StoreOp, StoreError>>,
    latency: Option<Duration>,
}

impl InMemoryBookmarkStore {
    pub fn new(rows: Vec<Bookmark>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: Mutex::new(Vec::new()),
            errors: Mutex::new(HashMap::new()),
            latency: None,
        }
    }

    /// Every operation sleeps this long before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_delete_error(self, err: StoreError) -> Self {
        guard(&self.errors).insert(StoreOp::Delete, err);
        self
    }

    pub fn with_clear_reminder_error(self, err: StoreError) -> Self {
        guard(&self.errors).insert(StoreOp::ClearReminder, err);
        self
    }

    pub fn with_toggle_pin_error(self, err: StoreError) -> Self {
        guard(&self.errors).insert(StoreOp::TogglePin, err);
        self
    }

    pub fn with_load_error(self, err: StoreError) -> Self {
        guard(&self.errors).insert(StoreOp::Load, err);
        self
    }

    /// Replaces the server-side rows, e.g. to simulate an edit elsewhere.
    pub fn set_rows(&self, rows: Vec<Bookmark>) {
        *guard(&self.rows) = rows;
    }

    pub fn rows(&self) -> Vec<Bookmark> {
        guard(&self.rows).clone()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        guard(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        guard(&self.calls).len()
    }

    async fn enter(&self, call: StoreCall, op: StoreOp) -> Result<(), StoreError> {
        guard(&self.calls).push(call);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match guard(&self.errors).get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn with_row<F>(&self, id: BookmarkId, update: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Bookmark),
    {
        let mut rows = guard(&self.rows);
        let row = rows
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::Rejected { status: 404 })?;
        update(row);
        Ok(())
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn delete_bookmark(&self, id: BookmarkId) -> Result<(), StoreError> {
        self.enter(StoreCall::Delete(id), StoreOp::Delete).await?;
        let mut rows = guard(&self.rows);
        let before = rows.len();
        rows.retain(|b| b.id != id);
        if rows.len() == before {
            return Err(StoreError::Rejected { status: 404 });
        }
        Ok(())
    }

    async fn clear_reminder(&self, id: BookmarkId) -> Result<(), StoreError> {
        self.enter(StoreCall::ClearReminder(id), StoreOp::ClearReminder).await?;
        self.with_row(id, |row| row.reminder_at = None)
    }

    async fn toggle_pin(&self, id: BookmarkId) -> Result<(), StoreError> {
        self.enter(StoreCall::TogglePin(id), StoreOp::TogglePin).await?;
        self.with_row(id, |row| row.pinned = !row.pinned)
    }

    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        self.enter(StoreCall::Load, StoreOp::Load).await?;
        // Pinned rows come first, as the server orders them.
        let mut rows = self.rows();
        rows.sort_by_key(|b| !b.pinned);
        Ok(rows)
    }
}

/// Confirmation dialog that always gives the same answer.
pub struct ScriptedConfirmer {
    answer: Confirmation,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        guard(&self.prompts).clone()
    }

    pub fn call_count(&self) -> usize {
        guard(&self.prompts).len()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, message: &str) -> Confirmation {
        guard(&self.prompts).push(message.to_string());
        self.answer
    }
}

/// Editing surface that closes with a preset outcome.
pub struct ScriptedEditor {
    outcome: Mutex<EditOutcome>,
    forms: Mutex<Vec<BookmarkFormData>>,
}

impl ScriptedEditor {
    pub fn new(outcome: EditOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            forms: Mutex::new(Vec::new()),
        }
    }

    pub fn set_outcome(&self, outcome: EditOutcome) {
        *guard(&self.outcome) = outcome;
    }

    /// Snapshots the surface was opened with.
    pub fn forms(&self) -> Vec<BookmarkFormData> {
        guard(&self.forms).clone()
    }
}

impl Default for ScriptedEditor {
    fn default() -> Self {
        Self::new(EditOutcome::Dismissed)
    }
}

#[async_trait]
impl EditorSurface for ScriptedEditor {
    async fn edit(&self, form: BookmarkFormData) -> EditOutcome {
        guard(&self.forms).push(form);
        guard(&self.outcome).clone()
    }
}

/// Publisher that keeps every event it is given.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<BookmarkEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BookmarkEvent> {
        guard(&self.events).clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: BookmarkEvent) {
        guard(&self.events).push(event);
    }
}

/// Publisher that also captures which rows were listed when each event fired.
pub struct ListObservingPublisher {
    state: SharedListState,
    published: Mutex<Vec<(BookmarkEvent, Vec<BookmarkId>)>>,
}

impl ListObservingPublisher {
    pub fn new(state: SharedListState) -> Self {
        Self {
            state,
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<BookmarkEvent> {
        guard(&self.published).iter().map(|(event, _)| event.clone()).collect()
    }

    /// Listed ids at the moment of each publish, in publish order.
    pub fn listed_at_publish(&self) -> Vec<Vec<BookmarkId>> {
        guard(&self.published).iter().map(|(_, ids)| ids.clone()).collect()
    }
}

impl EventPublisher for ListObservingPublisher {
    fn publish(&self, event: BookmarkEvent) {
        let listed = lock_state(&self.state).content().ids();
        guard(&self.published).push((event, listed));
    }
}

/// Link opener that remembers what it was asked to open.
#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        guard(&self.opened).clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open_in_new_tab(&self, href: &str) {
        guard(&self.opened).push(href.to_string());
    }
}

/// Concrete mocks kept alongside the trait objects handed to a list.
#[derive(Clone)]
pub struct MockCollaborators {
    pub store: Arc<InMemoryBookmarkStore>,
    pub confirmer: Arc<ScriptedConfirmer>,
    pub editor: Arc<ScriptedEditor>,
    pub link_opener: Arc<RecordingLinkOpener>,
}

impl MockCollaborators {
    pub fn new(store: InMemoryBookmarkStore, answer: Confirmation) -> Self {
        Self {
            store: Arc::new(store),
            confirmer: Arc::new(ScriptedConfirmer::new(answer)),
            editor: Arc::new(ScriptedEditor::default()),
            link_opener: Arc::new(RecordingLinkOpener::new()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            store: self.store.clone(),
            confirmer: self.confirmer.clone(),
            editor: self.editor.clone(),
            link_opener: self.link_opener.clone(),
        }
    }
}
