//! Bookmark list core.
//!
//! Central struct wiring the list state, the mutation service, the click
//! router and the notification bus for one rendered list.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::click_router::ClickRouter;
use crate::managers::list_content::ListContent;
use crate::managers::list_state::{lock_state, ListState, SharedListState};
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::collaborators::Collaborators;
use crate::services::mutation_service::MutationService;
use crate::services::notification_bus::NotificationBus;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::{ClickError, SettingsError};
use crate::types::events::{BookmarkEvent, ClickEvent, ClickOutcome, SelectionSnapshot};
use crate::types::settings::ListSettings;

/// One bookmark list and everything acting on it.
pub struct BookmarkList {
    settings: ListSettings,
    state: SharedListState,
    bus: NotificationBus,
    mutations: MutationService,
    router: ClickRouter,
}

impl BookmarkList {
    /// Creates the list around already-loaded rows.
    pub fn new(settings: ListSettings, content: ListContent, collaborators: Collaborators) -> Self {
        let state = ListState::new(content).shared();
        let bus = NotificationBus::new(settings.notification_capacity);
        let mutations = MutationService::new(
            state.clone(),
            collaborators.store,
            collaborators.confirmer,
            collaborators.editor,
            Arc::new(bus.clone()),
            &settings,
        );
        let router = ClickRouter::new(state.clone(), &settings, collaborators.link_opener);

        Self {
            settings,
            state,
            bus,
            mutations,
            router,
        }
    }

    /// Like [`BookmarkList::new`], reading settings through a [`SettingsEngine`].
    pub fn from_config(
        config_path: Option<String>,
        content: ListContent,
        collaborators: Collaborators,
    ) -> Result<Self, SettingsError> {
        let mut engine = SettingsEngine::new(config_path);
        let settings = engine.load()?;
        log::info!("bookmark list settings loaded from {}", engine.get_config_path());
        Ok(Self::new(settings, content, collaborators))
    }

    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    pub fn state(&self) -> SharedListState {
        self.state.clone()
    }

    pub fn mutations(&self) -> &MutationService {
        &self.mutations
    }

    pub fn router(&self) -> &ClickRouter {
        &self.router
    }

    pub fn handle_click(&self, event: &ClickEvent) -> Result<ClickOutcome, ClickError> {
        self.router.handle_click(event)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<BookmarkEvent> {
        self.bus.subscribe()
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<SelectionSnapshot> {
        lock_state(&self.state).selection().subscribe()
    }

    /// Rows in render order.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        lock_state(&self.state).content().as_slice().to_vec()
    }

    pub fn find(&self, id: BookmarkId) -> Option<Bookmark> {
        lock_state(&self.state).content().get(&id).cloned()
    }

    pub fn selection_snapshot(&self) -> SelectionSnapshot {
        lock_state(&self.state).selection().snapshot()
    }

    /// Selected rows in render order.
    pub fn selected_bookmarks(&self) -> Vec<Bookmark> {
        let state = lock_state(&self.state);
        state
            .selection()
            .selected_bookmarks(state.content())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn is_bulk_select_enabled(&self) -> bool {
        lock_state(&self.state).selection().is_bulk_select_enabled()
    }

    /// Whether the bulk-select control is offered at all.
    pub fn bulk_select_available(&self) -> bool {
        self.settings.capabilities.bulk_actions_experiment_enabled
    }

    pub fn can_do_bulk_actions(&self) -> bool {
        lock_state(&self.state)
            .selection()
            .can_bulk_act(&self.settings.capabilities)
    }
}
