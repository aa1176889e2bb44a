pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "USERS_API_URL";
pub const CONFIG_FILE: &str = ".users-cli-config.json";

// Collection resource on the remote service
pub const USERS_PATH: &str = "/api/go/users";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Interactive mode
pub const TICK_RATE_MS: u64 = 100;
pub const NOTIFICATION_TTL_SECS: u64 = 5;
pub const MAX_NOTIFICATIONS: usize = 20;
