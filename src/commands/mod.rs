pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, UsersError, UsersResult};
use crate::models::UserId;

pub use config::handle_config;
pub use create::handle_create;
pub use delete::handle_delete;
pub use get::handle_get;
pub use list::handle_list;
pub use update::handle_update;

/// Build a context honouring the global `--api-url` flag.
pub(crate) fn context_from(matches: &ArgMatches) -> UsersResult<CliContext> {
    let url_flag = matches.get_one::<String>("api-url").map(|s| s.as_str());
    CliContext::load(url_flag).context("Failed to load CLI context")
}

pub(crate) fn parse_id(matches: &ArgMatches) -> UsersResult<UserId> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| UsersError::InvalidInput("User ID is required".to_string()))?;

    raw.trim()
        .parse::<UserId>()
        .map_err(|_| UsersError::InvalidInput(format!("'{}' is not a valid user ID", raw)))
}

pub(crate) fn output_format(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple")
}
