// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod sync;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{UsersApi, UsersClient};
pub use config::{Config, get_base_url, load_config, save_config};
pub use error::{UsersError, UsersResult};
pub use models::*;
pub use sync::{Completion, SyncController, SyncEvent, UserStore};
