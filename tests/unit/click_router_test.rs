//! Unit tests for click routing.

use std::sync::Arc;

use bookmark_list::click_router::ClickRouter;
use bookmark_list::managers::list_content::ListContent;
use bookmark_list::managers::list_state::{lock_state, ListState, SharedListState};
use bookmark_list::managers::selection_manager::SelectionManagerTrait;
use bookmark_list::mock::{sample_bookmark, RecordingLinkOpener};
use bookmark_list::types::bookmark::BookmarkId;
use bookmark_list::types::errors::{ClickError, SelectionError};
use bookmark_list::types::events::{ClickEvent, ClickOutcome, ClickTarget};
use bookmark_list::types::settings::ListSettings;
use rstest::rstest;

struct Harness {
    state: SharedListState,
    opener: Arc<RecordingLinkOpener>,
    router: ClickRouter,
}

fn harness(settings: ListSettings) -> Harness {
    let rows = (1..=4).map(|id| sample_bookmark(id, None)).collect();
    let state = ListState::new(ListContent::from_bookmarks(rows)).shared();
    let opener = Arc::new(RecordingLinkOpener::new());
    let router = ClickRouter::new(state.clone(), &settings, opener.clone());
    Harness { state, opener, router }
}

fn checkbox(raw_id: &str, checked: bool) -> ClickEvent {
    ClickEvent::new(ClickTarget::RowCheckbox {
        bookmark_id: raw_id.to_string(),
        checked,
    })
}

fn link(href: &str) -> ClickEvent {
    ClickEvent::new(ClickTarget::ContentLink { href: href.to_string() })
}

fn external_links_settings() -> ListSettings {
    let mut settings = ListSettings::default();
    settings.links.external_links_in_new_tab = true;
    settings.links.base_url = "https://forum.example.com".to_string();
    settings
}

#[test]
fn test_toggle_click_flips_mode_and_asks_for_rerender() {
    let h = harness(ListSettings::default());

    let outcome = h.router.handle_click(&ClickEvent::new(ClickTarget::BulkSelectToggle)).unwrap();

    assert_eq!(outcome, ClickOutcome::Rerender);
    assert!(lock_state(&h.state).selection().is_bulk_select_enabled());
}

#[test]
fn test_toggle_is_ignored_when_experiment_disabled() {
    let mut settings = ListSettings::default();
    settings.capabilities.bulk_actions_experiment_enabled = false;
    let h = harness(settings);

    let outcome = h.router.handle_click(&ClickEvent::new(ClickTarget::BulkSelectToggle)).unwrap();

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(!lock_state(&h.state).selection().is_bulk_select_enabled());
}

#[test]
fn test_checkbox_click_updates_selection() {
    let h = harness(ListSettings::default());

    assert_eq!(h.router.handle_click(&checkbox("1", true)).unwrap(), ClickOutcome::SelectionChanged);
    assert_eq!(
        h.router.handle_click(&checkbox("3", true).with_shift()).unwrap(),
        ClickOutcome::SelectionChanged
    );

    let state = lock_state(&h.state);
    assert_eq!(
        state.selection().selected_ids().len(),
        3,
        "shift-click should select rows 1 through 3"
    );
    assert_eq!(state.selection().last_checked(), Some(BookmarkId(3)));
}

#[test]
fn test_unchecking_via_click() {
    let h = harness(ListSettings::default());
    h.router.handle_click(&checkbox("2", true)).unwrap();

    h.router.handle_click(&checkbox("2", false)).unwrap();

    assert!(lock_state(&h.state).selection().selected_ids().is_empty());
}

#[rstest]
#[case("99")]
#[case("not-a-number")]
#[case("")]
fn test_unknown_checkbox_id_is_an_error(#[case] raw_id: &str) {
    let h = harness(ListSettings::default());

    let err = h.router.handle_click(&checkbox(raw_id, true)).unwrap_err();

    assert_eq!(err, ClickError::UnknownBookmark(raw_id.to_string()));
    assert!(lock_state(&h.state).selection().selected_ids().is_empty());
}

#[test]
fn test_selection_error_converts_into_click_error() {
    let err: ClickError = SelectionError::NotInList(BookmarkId(8)).into();
    assert_eq!(err.to_string(), "Bookmark not in list: 8");
}

#[test]
fn test_external_link_opens_in_new_tab() {
    let h = harness(external_links_settings());

    let outcome = h.router.handle_click(&link("https://rust-lang.org/learn")).unwrap();

    assert_eq!(outcome, ClickOutcome::OpenedInNewTab);
    assert_eq!(h.opener.opened(), vec!["https://rust-lang.org/learn".to_string()]);
}

#[rstest]
#[case("https://forum.example.com/t/topic/12")]
#[case("/t/topic/12")]
#[case("mailto:someone@example.com")]
fn test_internal_links_use_default_navigation(#[case] href: &str) {
    let h = harness(external_links_settings());

    assert_eq!(h.router.handle_click(&link(href)).unwrap(), ClickOutcome::DefaultNavigation);
    assert!(h.opener.opened().is_empty());
}

#[test]
fn test_external_link_without_preference_navigates_normally() {
    let h = harness(ListSettings::default());

    let outcome = h.router.handle_click(&link("https://rust-lang.org")).unwrap();

    assert_eq!(outcome, ClickOutcome::DefaultNavigation);
    assert!(h.opener.opened().is_empty());
}

#[test]
fn test_other_clicks_are_ignored() {
    let h = harness(ListSettings::default());

    assert_eq!(h.router.handle_click(&ClickEvent::new(ClickTarget::Other)).unwrap(), ClickOutcome::Ignored);
    assert!(!lock_state(&h.state).selection().is_bulk_select_enabled());
}

#[test]
fn test_click_event_deserializes_from_host_json() {
    let event: ClickEvent = serde_json::from_str(
        r#"{"target":{"kind":"row_checkbox","bookmark_id":"4","checked":true},"shift_key":true}"#,
    )
    .unwrap();
    assert_eq!(event, checkbox("4", true).with_shift());

    let toggle: ClickEvent = serde_json::from_str(r#"{"target":{"kind":"bulk_select_toggle"}}"#).unwrap();
    assert!(!toggle.shift_key);
    assert_eq!(toggle.target, ClickTarget::BulkSelectToggle);
}
