use bookmark_list::types::bookmark::BookmarkId;
use bookmark_list::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Rejected { status: 404 }.to_string(),
        "Bookmark store rejected request: status 404"
    );
    assert_eq!(
        StoreError::Network("connection reset".to_string()).to_string(),
        "Bookmark store network error: connection reset"
    );
    assert_eq!(
        StoreError::Malformed("missing id".to_string()).to_string(),
        "Bookmark store returned malformed data: missing id"
    );
}

// === MutationError Tests ===

#[test]
fn mutation_error_forwards_store_message() {
    let store = StoreError::Rejected { status: 500 };
    let err: MutationError = store.clone().into();
    assert_eq!(err, MutationError::Store(store.clone()));
    assert_eq!(err.to_string(), store.to_string());
}

#[test]
fn mutation_error_in_flight_display() {
    assert_eq!(
        MutationError::InFlight(BookmarkId(12)).to_string(),
        "Mutation already in flight for bookmark: 12"
    );
}

// === SelectionError Tests ===

#[test]
fn selection_error_not_in_list_display() {
    assert_eq!(
        SelectionError::NotInList(BookmarkId(3)).to_string(),
        "Bookmark not in list: 3"
    );
}

// === ClickError Tests ===

#[test]
fn click_error_display_variants() {
    assert_eq!(
        ClickError::UnknownBookmark("abc".to_string()).to_string(),
        "Unknown bookmark: abc"
    );
    let wrapped: ClickError = SelectionError::NotInList(BookmarkId(9)).into();
    assert_eq!(wrapped.to_string(), "Bookmark not in list: 9");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(SettingsError::Io("disk full".to_string()).to_string(), "Settings I/O error: disk full");
    assert_eq!(
        SettingsError::Serialization("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}

#[test]
fn errors_implement_error_trait() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(StoreError::Network("x".to_string())),
        Box::new(MutationError::InFlight(BookmarkId(1))),
        Box::new(SelectionError::NotInList(BookmarkId(1))),
        Box::new(SettingsError::Io("x".to_string())),
    ];
    for err in errors {
        assert!(!err.to_string().is_empty());
    }
}
