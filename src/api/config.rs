//! Remote API configuration.
//!
//! Settings come either from code or from the environment:
//!
//! - `OPSBOARD_API_URL`: API base URL (required)
//! - `OPSBOARD_API_TOKEN`: bearer token (optional)
//! - `OPSBOARD_API_TIMEOUT_SECS`: request timeout in seconds (default 30)

use std::time::Duration;
use thiserror::Error;

/// Errors returned while building an [`ApiConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required setting {0}")]
    MissingVariable(&'static str),

    /// The base URL is not an absolute HTTP(S) URL.
    #[error("invalid API base URL '{0}', expected http:// or https://")]
    InvalidUrl(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid API timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Connection settings for the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl ApiConfig {
    /// Environment variable holding the base URL.
    pub const URL_VAR: &'static str = "OPSBOARD_API_URL";
    /// Environment variable holding the bearer token.
    pub const TOKEN_VAR: &'static str = "OPSBOARD_API_TOKEN";
    /// Environment variable holding the timeout in seconds.
    pub const TIMEOUT_VAR: &'static str = "OPSBOARD_API_TIMEOUT_SECS";
    /// Request timeout used when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a configuration for the API at `base_url`.
    ///
    /// A trailing slash is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the URL is not HTTP(S).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidUrl(raw));
        }

        Ok(Self {
            base_url: trimmed.to_owned(),
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a setting is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a setting is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let url = read(Self::URL_VAR).ok_or(ConfigError::MissingVariable(Self::URL_VAR))?;
        let mut config = Self::new(url)?;
        if let Some(token) = read(Self::TOKEN_VAR) {
            config = config.with_token(token.trim());
        }
        if let Some(raw_timeout) = read(Self::TIMEOUT_VAR) {
            let seconds = raw_timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw_timeout.clone()))?;
            config = config.with_timeout(Duration::from_secs(seconds));
        }
        Ok(config)
    }

    /// Returns the base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
