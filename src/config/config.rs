use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{UsersError, UsersResult};
use crate::logging::log_error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Request timeout. A zero or missing value falls back to the default.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

pub fn config_path() -> UsersResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| UsersError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the saved configuration, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config() -> Config {
    let loaded = config_path().and_then(|path| load_config_from(&path));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            log_error(&format!("Ignoring saved configuration: {}", e));
            Config::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> UsersResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&config_str)?)
}

pub fn save_config(config: &Config) -> UsersResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> UsersResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Check that `raw` is an absolute http(s) URL and return it without a
/// trailing slash so paths can be appended directly.
pub fn validate_base_url(raw: &str) -> UsersResult<String> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| UsersError::InvalidInput(format!("Invalid API URL '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(UsersError::InvalidInput(format!(
            "Unsupported URL scheme '{}' in '{}'",
            other, trimmed
        ))),
    }
}

/// Pick the base URL by precedence: explicit flag, environment, saved
/// config, then the local development default.
pub fn resolve_base_url(
    flag: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> UsersResult<String> {
    let candidate = flag
        .or(env_value)
        .or(config.base_url.as_deref())
        .unwrap_or(DEFAULT_API_URL);

    validate_base_url(candidate)
}

pub fn get_base_url(flag: Option<&str>) -> UsersResult<String> {
    let env_value = env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
    resolve_base_url(flag, env_value.as_deref(), &load_config())
}
