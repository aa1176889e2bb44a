use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::{config_path, load_config, save_config};
use crate::constants::{API_URL_ENV, DEFAULT_API_URL};
use crate::error::{ErrorContext, UsersError, UsersResult};

pub async fn handle_config(matches: &ArgMatches) -> UsersResult<()> {
    let mut changed = false;

    // Only the subcommand's own --url sets the saved URL; the global
    // --api-url flag is a one-off override.
    if let Some(url) = matches.get_one::<String>("url") {
        let mut context = CliContext::new();
        let saved = context.set_base_url(url)?;
        println!("API URL saved: {}", saved);
        changed = true;
    }

    if let Some(timeout) = matches.get_one::<String>("timeout") {
        let secs = timeout.trim().parse::<u64>().map_err(|_| {
            UsersError::InvalidInput(format!("'{}' is not a number of seconds", timeout))
        })?;
        if secs == 0 {
            return Err(UsersError::InvalidInput("Timeout must be at least 1 second".to_string()));
        }
        let mut config = load_config();
        config.timeout_secs = Some(secs);
        save_config(&config).context("Failed to save request timeout")?;
        println!("Request timeout saved: {}s", secs);
        changed = true;
    }

    if matches.get_flag("show") || !changed {
        let config = load_config();
        println!("Config file: {}", config_path()?.display());
        println!(
            "Saved API URL: {}",
            config.base_url.as_deref().unwrap_or("(none)")
        );
        if let Ok(value) = std::env::var(API_URL_ENV) {
            println!("{} override: {}", API_URL_ENV, value);
        }
        println!("Default API URL: {}", DEFAULT_API_URL);
        println!("Request timeout: {}s", config.timeout().as_secs());
    }

    Ok(())
}
