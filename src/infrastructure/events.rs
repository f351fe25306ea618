use crate::domain::events::{EventPublisher, NotificationCacheEvent};
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// Fans cache events out to any number of subscribers.
///
/// Slow subscribers lag and lose the oldest events rather than blocking the
/// cache.
#[derive(Debug, Clone)]
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<NotificationCacheEvent>,
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastEventPublisher {
    /// Creates a publisher buffering up to `capacity` events per subscriber.
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationCacheEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventPublisher for BroadcastEventPublisher {
    fn publish_event(&self, event: NotificationCacheEvent) {
        if self.sender.send(event).is_err() {
            debug!("No subscribers for notification cache event");
        }
    }
}
