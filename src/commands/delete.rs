use clap::ArgMatches;
use colored::*;

use super::{context_from, parse_id};
use crate::error::UsersResult;

pub async fn handle_delete(matches: &ArgMatches) -> UsersResult<()> {
    let mut context = context_from(matches)?;
    let mut controller = context.controller()?;
    let id = parse_id(matches)?;

    controller.delete(id).await?;
    println!("{} User {} deleted.", "✅".green(), id.to_string().bold());

    Ok(())
}
