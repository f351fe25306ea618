pub mod notification_controller;

pub use notification_controller::NotificationController;
