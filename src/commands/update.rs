use clap::ArgMatches;
use colored::*;

use super::{context_from, parse_id};
use crate::client::UsersApi;
use crate::error::{UsersError, UsersResult};
use crate::logging::log_error;
use crate::models::NewUser;

/// Replace a user's name and email on the service.
///
/// The service overwrites both fields, so both are required.
pub async fn handle_update(matches: &ArgMatches) -> UsersResult<()> {
    let mut context = context_from(matches)?;
    let client = context.client()?;
    let id = parse_id(matches)?;

    let name = matches.get_one::<String>("name")
        .ok_or_else(|| UsersError::InvalidInput("--name is required".to_string()))?;
    let email = matches.get_one::<String>("email")
        .ok_or_else(|| UsersError::InvalidInput("--email is required".to_string()))?;

    let user = client
        .update_user(id, &NewUser::new(name.clone(), email.clone()))
        .await
        .map_err(|e| {
            log_error(&format!("Error updating user {}: {}", id, e));
            e
        })?;

    println!("{} {}", "✅".green(), "User updated successfully!".green().bold());
    println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
    println!("{}: {}", "Name".bold(), user.name);
    println!("{}: {}", "Email".bold(), user.email);

    Ok(())
}
