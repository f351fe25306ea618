pub mod key_value_store;
pub mod notification_feed;

pub use key_value_store::{DynKeyValueStore, KeyValueStore};
pub use notification_feed::{DynNotificationFeed, NotificationFeed};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;

#[cfg(test)]
pub use notification_feed::MockNotificationFeed;
