pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod reveal;

pub use icon::{Icon, icons};
pub use notifications::{
    NotificationManager, NotificationsContainer, provide_notifications, use_notifications,
};
pub use reveal::{RevealBoundary, RevealItem, RevealScope, RevealSection};
