use std::sync::Arc;

use super::NotificationCacheEvent;

#[cfg(test)]
use mockall::automock;

/// Receives cache changes after they have been applied.
///
/// Publishing cannot fail from the cache's point of view; implementations
/// deal with their own delivery problems.
#[cfg_attr(test, automock)]
pub trait EventPublisher: Send + Sync {
    fn publish_event(&self, event: NotificationCacheEvent);
}

pub type DynEventPublisher = Arc<dyn EventPublisher>;

#[derive(Default)]
pub struct NoopEventPublisher;

impl EventPublisher for NoopEventPublisher {
    fn publish_event(&self, _event: NotificationCacheEvent) {}
}
