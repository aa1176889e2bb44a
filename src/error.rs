use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UsersError {
    /// True for every way a call to the remote service can fail: transport
    /// errors, timeouts, non-success statuses and unreadable envelopes.
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            UsersError::ApiError(_) | UsersError::RequestError(_) | UsersError::JsonError(_)
        )
    }
}

pub type UsersResult<T> = Result<T, UsersError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> UsersResult<T>;
    fn with_context<F>(self, f: F) -> UsersResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> UsersResult<T> {
        self.map_err(|e| UsersError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> UsersResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| UsersError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> UsersResult<T> {
        self.ok_or_else(|| UsersError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> UsersResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| UsersError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! users_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::UsersError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::UsersError::$error_type(format!($fmt, $($arg)*))
    };
}
