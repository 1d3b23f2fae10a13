//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::env;
use std::time::Duration;

use super::error::ClientError;
use super::transport::Parameters;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://api.eventsquare.io/1.0";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API base URL.
pub const ENV_API_URL: &str = "EVENTSQUARE_API_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "EVENTSQUARE_API_KEY";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "EVENTSQUARE_TIMEOUT_SECS";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Optional API key for authentication.
    pub api_key: Option<String>,

    /// User agent string.
    pub user_agent: String,

    /// Default parameters merged into every store request.
    pub meta: Parameters,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
            user_agent: format!("eventsquare-sdk/{}", env!("CARGO_PKG_VERSION")),
            meta: Parameters::new(),
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

    /// Builds a configuration from `EVENTSQUARE_*` environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is not a number or the resulting
    /// configuration is invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is not a number or the resulting
    /// configuration is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = url;
        }

        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
            config.api_key = Some(key);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!(
                    "{} must be a number, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a default parameter sent with every store request.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.set(key, value);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
