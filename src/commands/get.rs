use clap::ArgMatches;

use super::{context_from, output_format, parse_id};
use crate::client::UsersApi;
use crate::error::UsersResult;
use crate::formatting::print_user;

pub async fn handle_get(matches: &ArgMatches) -> UsersResult<()> {
    let mut context = context_from(matches)?;
    let client = context.client()?;
    let id = parse_id(matches)?;

    let user = client.get_user(id).await?;
    print_user(&user, output_format(matches))
}
