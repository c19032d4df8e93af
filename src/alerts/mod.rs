pub mod evaluate;
pub mod poller;
pub mod slot;

pub use poller::AlertPoller;
