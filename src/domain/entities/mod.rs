pub mod cache_state;
pub mod notification;

pub use cache_state::NotificationCacheState;
pub use notification::NotificationRecord;
