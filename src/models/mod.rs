pub mod alert;
pub mod event;
pub mod summary;
pub mod user;
