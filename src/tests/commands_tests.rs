use clap::{Arg, Command};

use crate::commands::{context_from, parse_id};
use crate::error::UsersError;

fn cli() -> Command {
    Command::new("users")
        .arg(Arg::new("api-url").long("api-url").global(true))
        .subcommand(Command::new("get").arg(Arg::new("id").required(true).index(1)))
}

#[test]
fn bad_api_url_flag_names_the_failed_step() {
    let matches = cli()
        .try_get_matches_from(["users", "get", "1", "--api-url", "ftp://example.com"])
        .unwrap();
    let (_, sub_matches) = matches.subcommand().unwrap();

    match context_from(sub_matches) {
        Err(UsersError::Unknown(msg)) => {
            assert!(msg.starts_with("Failed to load CLI context"));
            assert!(msg.contains("ftp"));
        }
        _ => panic!("Expected UsersError::Unknown"),
    }
}

#[test]
fn api_url_flag_reaches_the_context() {
    let matches = cli()
        .try_get_matches_from(["users", "get", "1", "--api-url", "http://example.com/"])
        .unwrap();
    let (_, sub_matches) = matches.subcommand().unwrap();

    let mut context = context_from(sub_matches).unwrap();
    assert_eq!(context.base_url().unwrap(), "http://example.com");
}

#[test]
fn non_numeric_id_is_invalid_input() {
    let matches = cli().try_get_matches_from(["users", "get", "abc"]).unwrap();
    let (_, sub_matches) = matches.subcommand().unwrap();

    match parse_id(sub_matches) {
        Err(UsersError::InvalidInput(msg)) => assert!(msg.contains("abc")),
        _ => panic!("Expected UsersError::InvalidInput"),
    }
}
