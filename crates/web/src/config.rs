//! Storefront configuration.
//!
//! Read from the environment on native builds; baked in at compile time for
//! the wasm client, which has no process environment.

use std::time::Duration;

use thiserror::Error;

use storefront_observability::{LogFormat, UnknownLogFormat};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/products";

/// How long the add-to-cart notification stays visible.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_NOTIFICATION_MS: &str = "STOREFRONT_NOTIFICATION_MS";
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} must be a whole number of milliseconds (got {value:?})")]
    InvalidDuration { var: &'static str, value: String },
    #[error(transparent)]
    LogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Product-listing endpoint.
    pub api_url: String,
    pub notification_duration: Duration,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load from process environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup (tests inject a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty { var: ENV_API_URL });
            }
            config.api_url = url.to_string();
        }

        if let Some(raw) = lookup(ENV_NOTIFICATION_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    var: ENV_NOTIFICATION_MS,
                    value: raw.clone(),
                })?;
            config.notification_duration = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }

    /// Configuration fixed at build time (`STOREFRONT_API_URL` when compiling).
    pub fn compiled() -> Self {
        Self {
            api_url: option_env!("STOREFRONT_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            ..Self::default()
        }
    }
}
