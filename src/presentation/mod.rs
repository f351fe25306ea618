pub mod controllers;
pub mod dtos;

pub use controllers::NotificationController;
pub use dtos::{NotificationError, NotificationFeedResponse, NotificationListResponse};
