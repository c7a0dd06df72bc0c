pub mod child;
pub mod dispatch;
pub mod quiz;
pub mod story;
pub mod topics;
