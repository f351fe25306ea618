pub mod notification_sync_use_cases;

pub use notification_sync_use_cases::NotificationSyncUseCases;
