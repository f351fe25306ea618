pub mod entities;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

pub use entities::{NotificationCacheState, NotificationRecord};

pub use error::{DomainError, DomainResult};

pub use events::{DynEventPublisher, EventPublisher, NoopEventPublisher, NotificationCacheEvent};

pub use repositories::{DynKeyValueStore, DynNotificationFeed, KeyValueStore, NotificationFeed};

pub use services::{NotificationCache, ReadLedger, SharedNotificationCache, READ_NOTIFICATIONS_KEY};
