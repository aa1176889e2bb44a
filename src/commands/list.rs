use clap::ArgMatches;

use super::{context_from, output_format};
use crate::error::UsersResult;
use crate::formatting::print_users;

pub async fn handle_list(matches: &ArgMatches) -> UsersResult<()> {
    let mut context = context_from(matches)?;
    let mut controller = context.controller()?;

    controller.load().await?;
    print_users(controller.users(), output_format(matches))
}
