pub mod cache_events;
pub mod publisher;

pub use cache_events::NotificationCacheEvent;
pub use publisher::{DynEventPublisher, EventPublisher, NoopEventPublisher};

#[cfg(test)]
pub use publisher::MockEventPublisher;
