pub mod notification;

pub use notification::{NotificationError, NotificationFeedResponse, NotificationListResponse};
