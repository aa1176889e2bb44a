pub mod controller;
pub mod store;

pub use controller::{Completion, SyncController, SyncEvent};
pub use store::{Draft, UserStore};
