//! Client configuration.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Root of the CBR daily archive.
pub const BASE_URL: &str = "https://www.cbr-xml-daily.ru/archive";

pub const BASE_URL_ENV: &str = "CBR_BASE_URL";
pub const TIMEOUT_ENV: &str = "CBR_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CBR_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Settings for the production transport.
///
/// `timeout` of `None` leaves the transport's own defaults in place, which
/// for a silent peer may mean blocking indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Read `CBR_BASE_URL` and `CBR_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Apply command-line values on top of whatever the environment gave.
    /// A `None` keeps the current setting.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}
