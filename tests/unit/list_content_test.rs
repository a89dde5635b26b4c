use bookmark_list::managers::list_content::ListContent;
use bookmark_list::managers::list_state::ListState;
use bookmark_list::managers::selection_manager::SelectionManagerTrait;
use bookmark_list::mock::sample_bookmark;
use bookmark_list::types::bookmark::{AutoDeletePreference, Bookmark, BookmarkId};

fn content_of(ids: &[i64]) -> ListContent {
    ListContent::from_bookmarks(ids.iter().map(|id| sample_bookmark(*id, None)).collect())
}

#[test]
fn test_order_is_preserved() {
    let content = content_of(&[5, 2, 9]);
    assert_eq!(content.ids(), vec![BookmarkId(5), BookmarkId(2), BookmarkId(9)]);
    assert_eq!(content.index_of(&BookmarkId(9)), Some(2));
    assert_eq!(content.len(), 3);
    assert!(!content.is_empty());
}

#[test]
fn test_empty_list() {
    let content = ListContent::new();
    assert!(content.is_empty());
    assert_eq!(content.index_of(&BookmarkId(1)), None);
    assert!(content.get(&BookmarkId(1)).is_none());
}

#[test]
fn test_remove_prunes_selection() {
    let mut state = ListState::new(content_of(&[1, 2, 3]));
    {
        let (content, selection) = state.split_mut();
        selection.set_checked(content, BookmarkId(1), true, false).unwrap();
        selection.set_checked(content, BookmarkId(2), true, false).unwrap();
    }

    let removed = state.remove_bookmark(&BookmarkId(2));

    assert_eq!(removed.map(|b| b.id), Some(BookmarkId(2)));
    assert_eq!(state.content().ids(), vec![BookmarkId(1), BookmarkId(3)]);
    assert_eq!(state.selection().selected_ids(), &[BookmarkId(1)]);
}

#[test]
fn test_remove_missing_row_is_noop() {
    let mut state = ListState::new(content_of(&[1]));
    assert!(state.remove_bookmark(&BookmarkId(2)).is_none());
    assert_eq!(state.content().len(), 1);
}

#[test]
fn test_replace_content_prunes_selection() {
    let mut state = ListState::new(content_of(&[1, 2, 3]));
    {
        let (content, selection) = state.split_mut();
        selection.set_checked(content, BookmarkId(3), true, false).unwrap();
        selection.set_checked(content, BookmarkId(1), true, false).unwrap();
    }

    state.replace_content(content_of(&[1, 2]));

    assert_eq!(state.selection().selected_ids(), &[BookmarkId(1)]);
}

#[test]
fn test_set_reminder_at_patches_only_that_row() {
    let mut state = ListState::new(ListContent::from_bookmarks(vec![
        sample_bookmark(1, Some("2024-01-01T00:00:00Z")),
        sample_bookmark(2, Some("2024-02-01T00:00:00Z")),
    ]));

    assert!(state.set_reminder_at(&BookmarkId(1), None));
    assert!(!state.set_reminder_at(&BookmarkId(7), None));

    assert!(state.content().get(&BookmarkId(1)).unwrap().reminder_at.is_none());
    assert!(state.content().get(&BookmarkId(2)).unwrap().reminder_at.is_some());
}

#[test]
fn test_bookmark_deserializes_from_server_row() {
    let bookmark: Bookmark = serde_json::from_str(
        r#"{
            "id": 17,
            "name": "later",
            "title": "Async traits",
            "reminder_at": "2024-03-01T10:00:00Z",
            "pinned": true,
            "auto_delete_preference": 2,
            "attached_to": {"target": "topic", "target_id": 88}
        }"#,
    )
    .unwrap();

    assert_eq!(bookmark.id, BookmarkId(17));
    assert_eq!(bookmark.auto_delete_preference, AutoDeletePreference::OnOwnerReply);
    assert!(bookmark.needs_delete_confirmation());
    assert!(bookmark.excerpt.is_none());
    assert_eq!(bookmark.attached_to.target, "topic");
}

#[test]
fn test_unknown_auto_delete_preference_is_rejected() {
    let result = serde_json::from_str::<Bookmark>(
        r#"{"id": 1, "auto_delete_preference": 9, "attached_to": {"target": "post", "target_id": 1}}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_bookmark_id_parses_trimmed_strings() {
    assert_eq!(" 42 ".parse::<BookmarkId>().unwrap(), BookmarkId(42));
    assert!("x".parse::<BookmarkId>().is_err());
}
