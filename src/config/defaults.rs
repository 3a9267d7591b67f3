//! Default values for configuration options.

/// Default OpsLevel API base URL.
pub const BASE_URL: &str = crate::integration::DEFAULT_BASE_URL;

/// Default path written by `opslevel-notify init`.
pub const CONFIG_FILE: &str = "opslevel-notify.toml";

/// Upper bound accepted for the request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

