use bookmark_list::mock::sample_bookmark;
use bookmark_list::services::collaborators::EventPublisher;
use bookmark_list::services::notification_bus::NotificationBus;
use bookmark_list::types::bookmark::BookmarkFormData;
use bookmark_list::types::events::{BookmarkEvent, BOOKMARKS_CHANGED};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

fn deleted(id: i64) -> BookmarkEvent {
    BookmarkEvent::Changed {
        payload: None,
        target: sample_bookmark(id, None).attached_to,
    }
}

#[tokio::test]
async fn test_every_subscriber_receives_event() {
    let bus = NotificationBus::default();
    let mut first = bus.subscribe();
    let mut second = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 2);

    bus.publish(deleted(1));

    assert_eq!(first.recv().await.unwrap(), deleted(1));
    assert_eq!(second.recv().await.unwrap(), deleted(1));
}

#[test]
fn test_publish_without_subscribers_is_silent() {
    let bus = NotificationBus::new(4);
    bus.publish(deleted(1));
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_late_subscriber_misses_earlier_events() {
    let bus = NotificationBus::new(4);
    bus.publish(deleted(1));

    let mut rx = bus.subscribe();
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

    bus.publish(deleted(2));
    assert_eq!(rx.try_recv().unwrap(), deleted(2));
}

#[tokio::test]
async fn test_slow_subscriber_lags() {
    let bus = NotificationBus::new(2);
    let mut rx = bus.subscribe();

    for id in 1..=4 {
        bus.publish(deleted(id));
    }

    assert_eq!(rx.recv().await, Err(RecvError::Lagged(2)));
    assert_eq!(rx.recv().await.unwrap(), deleted(3));
    assert_eq!(rx.recv().await.unwrap(), deleted(4));
}

#[test]
fn test_clones_share_one_channel() {
    let bus = NotificationBus::new(8);
    let publisher = bus.clone();
    let mut rx = bus.subscribe();

    publisher.publish(deleted(7));

    assert_eq!(rx.try_recv().unwrap(), deleted(7));
}

#[test]
fn test_event_topic_and_wire_shape() {
    let bookmark = sample_bookmark(5, None);
    let saved = BookmarkEvent::Changed {
        payload: Some(BookmarkFormData::from(&bookmark)),
        target: bookmark.attached_to.clone(),
    };
    assert_eq!(saved.topic(), BOOKMARKS_CHANGED);
    assert_eq!(BOOKMARKS_CHANGED, "bookmarks:changed");

    let json = serde_json::to_value(deleted(5)).unwrap();
    assert_eq!(json["kind"], "changed");
    assert!(json["payload"].is_null());
    assert_eq!(json["target"]["target"], "post");
    assert_eq!(json["target"]["target_id"], 500);
}

#[test]
fn test_out_of_range_capacity_is_clamped() {
    for capacity in [0, usize::MAX] {
        let bus = NotificationBus::new(capacity);
        let mut rx = bus.subscribe();

        bus.publish(deleted(1));

        assert_eq!(rx.try_recv().unwrap(), deleted(1));
    }
}
