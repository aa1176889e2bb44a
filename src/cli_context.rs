use std::sync::Arc;
use std::time::Duration;

use crate::client::UsersClient;
use crate::config::{get_base_url, load_config, save_config, validate_base_url};
use crate::error::UsersResult;
use crate::sync::SyncController;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    base_url: Option<String>,
    timeout: Duration,
    client: Option<Arc<UsersClient>>,
}

impl CliContext {
    /// Create a new CLI context; the base URL is resolved on first use
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: load_config().timeout(),
            client: None,
        }
    }

    /// Load context, resolving the base URL from flag, environment and config
    pub fn load(url_flag: Option<&str>) -> UsersResult<Self> {
        let config = load_config();
        let base_url = get_base_url(url_flag)?;

        Ok(Self {
            base_url: Some(base_url),
            timeout: config.timeout(),
            client: None,
        })
    }

    /// Get the base URL, resolving it if necessary
    pub fn base_url(&mut self) -> UsersResult<&String> {
        if self.base_url.is_none() {
            self.base_url = Some(get_base_url(None)?);
        }

        self.base_url
            .as_ref()
            .ok_or_else(|| crate::users_error!(ConfigError, "No API URL configured"))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get or create the shared HTTP client
    pub fn client(&mut self) -> UsersResult<Arc<UsersClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let base_url = self.base_url()?.clone();
        let client = Arc::new(UsersClient::with_timeout(base_url, self.timeout)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Build a sync controller backed by this context's client
    pub fn controller(&mut self) -> UsersResult<SyncController> {
        let client = self.client()?;
        Ok(SyncController::new(client))
    }

    /// Validate, save and switch to a new base URL
    pub fn set_base_url(&mut self, raw: &str) -> UsersResult<String> {
        let base_url = validate_base_url(raw)?;
        let mut config = load_config();
        config.base_url = Some(base_url.clone());
        save_config(&config)?;
        self.base_url = Some(base_url.clone());
        self.client = None;
        Ok(base_url)
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> UsersResult<CliContext> {
        let mut context = match self.base_url {
            Some(raw) => CliContext {
                base_url: Some(validate_base_url(&raw)?),
                timeout: load_config().timeout(),
                client: None,
            },
            None => CliContext::load(None)?,
        };

        if let Some(timeout) = self.timeout {
            context.timeout = timeout;
        }

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
