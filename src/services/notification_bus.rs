//! Broadcast channel announcing bookmark changes to unrelated listeners.

use tokio::sync::broadcast;

use crate::services::collaborators::EventPublisher;
use crate::types::events::BookmarkEvent;
use crate::types::settings::MAX_NOTIFICATION_CAPACITY;

/// In-process bus backed by a `tokio` broadcast channel.
///
/// Receivers that fall more than `capacity` events behind skip the oldest
/// ones (`RecvError::Lagged`). Publishing never waits and never fails.
#[derive(Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<BookmarkEvent>,
}

impl NotificationBus {
    /// `capacity` is clamped to `1..=MAX_NOTIFICATION_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(1, MAX_NOTIFICATION_CAPACITY);
        if clamped != capacity {
            log::warn!("notification capacity {} out of range, using {}", capacity, clamped);
        }
        let (sender, _) = broadcast::channel(clamped);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BookmarkEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl EventPublisher for NotificationBus {
    fn publish(&self, event: BookmarkEvent) {
        log::debug!("publishing {} to {} listeners", event.topic(), self.subscriber_count());
        // An error only means nobody is listening.
        let _ = self.sender.send(event);
    }
}
