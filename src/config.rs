//! Client configuration loaded from environment variables.
//!
//! All settings come from environment variables, or from a `.env` file via
//! `dotenvy`. Numeric settings fall back to their defaults when missing or
//! unparsable; `API_URL` is validated because every request depends on it.

use crate::error::WireError;

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API base URL (`API_URL`).
    pub api_url: String,

    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`).
    pub request_timeout_secs: u64,

    /// Capacity of the current-user change channel (`USER_EVENT_CAPACITY`).
    pub user_event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_secs: 10,
            user_event_capacity: 64,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidConfig`] if `API_URL` is set but is not
    /// an absolute `http`/`https` URL.
    pub fn from_env() -> Result<Self, WireError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let api_url = std::env::var("API_URL").unwrap_or(defaults.api_url);
        validate_api_url(&api_url)?;

        let request_timeout_secs =
            parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs);
        let user_event_capacity = parse_env("USER_EVENT_CAPACITY", defaults.user_event_capacity);

        Ok(Self {
            api_url,
            request_timeout_secs,
            user_event_capacity,
        })
    }
}

/// Checks that `url` is an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`WireError::InvalidConfig`] describing the problem.
pub fn validate_api_url(url: &str) -> Result<(), WireError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|err| WireError::InvalidConfig(format!("API_URL {url:?}: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(WireError::InvalidConfig(format!(
            "API_URL must use http or https, got {other:?}"
        ))),
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
