pub mod add;
pub mod alerts;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod summary;
pub mod users;
pub mod watch;
