//! Client configuration.
//!
//! Provides configuration options for the HTTP dispatcher.

use std::env;
use std::time::Duration;

use crate::error::SdkError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://api.fury.bot";

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "FURY_API_URL";

/// Environment variable holding the bearer token.
pub const ENV_API_KEY: &str = "FURY_API_KEY";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FURY_TIMEOUT_SECS";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Optional bearer token sent in the `Authorization` header.
    pub api_key: Option<String>,

    /// Request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: format!("fury-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Builds a configuration from `FURY_API_URL`, `FURY_API_KEY` and
    /// `FURY_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `FURY_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };

        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            config = config.with_api_key(key);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SdkError::InvalidConfig(format!("{} must be a number, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.base_url.is_empty() {
            return Err(SdkError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SdkError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
