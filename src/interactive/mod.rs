pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod notifications;
pub mod ui;

pub use app::{AppMode, Dispatch, FormField, InteractiveApp};
pub use handlers::run_interactive_mode;
