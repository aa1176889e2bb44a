use clap::ArgMatches;
use colored::*;

use super::context_from;
use crate::error::{UsersError, UsersResult};
use crate::sync::SyncEvent;

pub async fn handle_create(matches: &ArgMatches) -> UsersResult<()> {
    let mut context = context_from(matches)?;
    let mut controller = context.controller()?;

    let name = matches.get_one::<String>("name")
        .ok_or_else(|| UsersError::InvalidInput("Name is required".to_string()))?;
    let email = matches.get_one::<String>("email")
        .ok_or_else(|| UsersError::InvalidInput("Email is required".to_string()))?;

    let draft = controller.draft_mut();
    draft.name = name.clone();
    draft.email = email.clone();

    if let SyncEvent::Created(user) = controller.create().await? {
        println!("{} {}", "✅".green(), "User created successfully!".green().bold());
        println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
        println!("{}: {}", "Name".bold(), user.name);
        println!("{}: {}", "Email".bold(), user.email);
    }

    Ok(())
}
