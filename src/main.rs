//! Bookmark list console demo.
//!
//! Drives a list backed by in-memory collaborators through bulk selection and
//! each mutation, printing the list after every step.

use bookmark_list::app::BookmarkList;
use bookmark_list::managers::list_content::ListContent;
use bookmark_list::mock::{sample_bookmark, InMemoryBookmarkStore, MockCollaborators};
use bookmark_list::services::mutation_service::MutationServiceTrait;
use bookmark_list::types::bookmark::BookmarkId;
use bookmark_list::types::events::{ClickEvent, ClickTarget, Confirmation};
use bookmark_list::types::settings::ListSettings;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Environment variable holding the log level (`error` .. `trace`).
const LOG_ENV_VAR: &str = "BOOKMARK_LIST_LOG";

fn init_logging() {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_list(list: &BookmarkList) {
    let snapshot = list.selection_snapshot();
    for bookmark in list.bookmarks() {
        let mark = if snapshot.selected.contains(&bookmark.id) { "[x]" } else { "[ ]" };
        let reminder = bookmark
            .reminder_at
            .map(|at| format!(" (reminder {})", at.to_rfc3339()))
            .unwrap_or_default();
        let pin = if bookmark.pinned { " (pinned)" } else { "" };
        println!("  {} #{} {}{}{}", mark, bookmark.id, bookmark.title, pin, reminder);
    }
    println!(
        "  bulk select: {}, bulk actions: {}",
        snapshot.bulk_select_enabled,
        list.can_do_bulk_actions()
    );
    println!();
}

fn checkbox(id: i64, checked: bool) -> ClickEvent {
    ClickEvent::new(ClickTarget::RowCheckbox {
        bookmark_id: id.to_string(),
        checked,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let rows = vec![
        sample_bookmark(1, None),
        sample_bookmark(2, None),
        sample_bookmark(3, Some("2024-01-01T00:00:00Z")),
        sample_bookmark(4, None),
        sample_bookmark(5, Some("2030-06-01T09:00:00Z")),
    ];
    let mocks = MockCollaborators::new(InMemoryBookmarkStore::new(rows.clone()), Confirmation::Confirmed);

    let mut settings = ListSettings::default();
    settings.capabilities.can_manage_list = true;
    let list = BookmarkList::new(settings, ListContent::from_bookmarks(rows), mocks.collaborators());
    let mut events = list.subscribe_events();

    section("Bulk selection");
    list.handle_click(&ClickEvent::new(ClickTarget::BulkSelectToggle))?;
    list.handle_click(&checkbox(1, true))?;
    list.handle_click(&checkbox(4, true).with_shift())?;
    list.handle_click(&checkbox(2, false))?;
    print_list(&list);

    section("Remove bookmark #3 (has reminder, confirmed)");
    if let Some(bookmark) = list.find(BookmarkId(3)) {
        let removed = list.mutations().remove_bookmark(&bookmark).await?;
        println!("  removed: {}", removed);
    }
    while let Ok(event) = events.try_recv() {
        println!("  event: {}", serde_json::to_string(&event)?);
    }
    print_list(&list);

    section("Clear reminder on #5, pin #4");
    if let Some(bookmark) = list.find(BookmarkId(5)) {
        list.mutations().clear_reminder(&bookmark).await?;
    }
    if let Some(bookmark) = list.find(BookmarkId(4)) {
        list.mutations().toggle_pin(&bookmark).await?;
    }
    print_list(&list);

    println!("  store calls: {:?}", mocks.store.calls());
    Ok(())
}
