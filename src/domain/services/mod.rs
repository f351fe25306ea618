pub mod notification_cache;
pub mod read_ledger;

pub use notification_cache::{NotificationCache, SharedNotificationCache};
pub use read_ledger::{ReadLedger, READ_NOTIFICATIONS_KEY};
