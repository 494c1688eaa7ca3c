pub mod command;
pub mod dispatch;
pub mod event;
