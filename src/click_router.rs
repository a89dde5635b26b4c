//! Click routing for the bookmark list.
//!
//! Inspects where a click came from and invokes exactly one handler: the
//! bulk-select toggle, a row checkbox, or an excerpt link.

use std::sync::Arc;

use crate::managers::list_state::{lock_state, SharedListState};
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::collaborators::LinkOpener;
use crate::services::link_policy::LinkPolicy;
use crate::types::errors::ClickError;
use crate::types::events::{ClickEvent, ClickOutcome, ClickTarget};
use crate::types::settings::{Capabilities, ListSettings};

/// Dispatches raw clicks. Holds no state of its own.
pub struct ClickRouter {
    state: SharedListState,
    capabilities: Capabilities,
    link_policy: LinkPolicy,
    link_opener: Arc<dyn LinkOpener>,
}

impl ClickRouter {
    pub fn new(state: SharedListState, settings: &ListSettings, link_opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            state,
            capabilities: settings.capabilities.clone(),
            link_policy: LinkPolicy::new(&settings.links),
            link_opener,
        }
    }

    pub fn handle_click(&self, event: &ClickEvent) -> Result<ClickOutcome, ClickError> {
        match &event.target {
            ClickTarget::BulkSelectToggle => Ok(self.toggle_bulk_select()),
            ClickTarget::RowCheckbox { bookmark_id, checked } => {
                self.row_checkbox(bookmark_id, *checked, event.shift_key)
            }
            ClickTarget::ContentLink { href } => Ok(self.content_link(href)),
            ClickTarget::Other => Ok(ClickOutcome::Ignored),
        }
    }

    fn toggle_bulk_select(&self) -> ClickOutcome {
        if !self.capabilities.bulk_actions_experiment_enabled {
            return ClickOutcome::Ignored;
        }
        lock_state(&self.state).selection_mut().toggle_bulk_select();
        ClickOutcome::Rerender
    }

    fn row_checkbox(&self, raw_id: &str, checked: bool, shift_key: bool) -> Result<ClickOutcome, ClickError> {
        let mut state = lock_state(&self.state);
        let (content, selection) = state.split_mut();
        let id = content
            .find_by_raw_id(raw_id)
            .map(|bookmark| bookmark.id)
            .ok_or_else(|| ClickError::UnknownBookmark(raw_id.to_string()))?;
        selection.set_checked(content, id, checked, shift_key)?;
        Ok(ClickOutcome::SelectionChanged)
    }

    fn content_link(&self, href: &str) -> ClickOutcome {
        if self.link_policy.should_open_in_new_tab(href) {
            log::debug!("opening {} in a new tab", href);
            self.link_opener.open_in_new_tab(href);
            ClickOutcome::OpenedInNewTab
        } else {
            ClickOutcome::DefaultNavigation
        }
    }
}
