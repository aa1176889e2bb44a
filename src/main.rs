use std::process;

use clap::{Arg, ArgMatches, Command};
use colored::*;

use users_cli::commands::{
    handle_config, handle_create, handle_delete, handle_get, handle_list, handle_update,
};
use users_cli::error::UsersResult;
use users_cli::interactive::run_interactive_mode;
use users_cli::logging::{get_log_file_path, init_logging};

fn id_arg() -> Arg {
    Arg::new("id")
        .value_name("USER_ID")
        .help("Numeric user ID")
        .required(true)
        .index(1)
}

fn format_arg(formats: &'static str) -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help(formats)
        .default_value("simple")
}

fn build_cli() -> Command {
    Command::new("users")
        .about("Manage users on a /api/go/users service from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the users service (overrides USERS_API_URL and saved config)")
                .global(true)
        )
        .subcommand(
            Command::new("ui")
                .about("Open the interactive user manager (default)")
        )
        .subcommand(
            Command::new("list")
                .about("List all users, newest first")
                .arg(format_arg("Output format: simple, table, json"))
        )
        .subcommand(
            Command::new("get")
                .about("Show a single user")
                .arg(id_arg())
                .arg(format_arg("Output format: simple, json"))
        )
        .subcommand(
            Command::new("create")
                .about("Create a new user")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("User name")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("email")
                        .value_name("EMAIL")
                        .help("User email")
                        .required(true)
                        .index(2)
                )
        )
        .subcommand(
            Command::new("update")
                .about("Replace a user's name and email")
                .arg(id_arg())
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("New name")
                        .required(true)
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("New email")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a user")
                .arg(id_arg())
        )
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Save the base URL of the users service")
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_name("SECS")
                        .help("Save the request timeout in seconds")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current settings")
                        .action(clap::ArgAction::SetTrue)
                )
        )
}

async fn dispatch(matches: &ArgMatches) -> UsersResult<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list(sub_matches).await,
        Some(("get", sub_matches)) => handle_get(sub_matches).await,
        Some(("create", sub_matches)) => handle_create(sub_matches).await,
        Some(("update", sub_matches)) => handle_update(sub_matches).await,
        Some(("delete", sub_matches)) => handle_delete(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        Some(("ui", sub_matches)) => {
            run_interactive_mode(sub_matches.get_one::<String>("api-url").map(|s| s.as_str())).await
        }
        _ => run_interactive_mode(matches.get_one::<String>("api-url").map(|s| s.as_str())).await,
    }
}

#[tokio::main]
async fn main() {
    // Logging is best effort; the client works without it
    let _ = init_logging();

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(path) = get_log_file_path() {
            eprintln!("{}", format!("Details logged to {}", path.display()).dimmed());
        }
        process::exit(1);
    }
}
