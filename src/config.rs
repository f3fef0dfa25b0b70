//! Environment-driven settings.
//!
//! Values come from the process environment after `dotenv` has loaded an
//! optional `.env` file:
//!
//! | Variable           | Default                      |
//! |--------------------|------------------------------|
//! | `DOH_ENDPOINT`     | `https://dns.google/resolve` |
//! | `DOH_TIMEOUT_SECS` | `10` (`0` disables)          |
//! | `SERVER_HOST`      | `127.0.0.1`                  |
//! | `SERVER_PORT`      | `8080`                       |
//! | `LOG_LEVEL`        | `info`                       |

use crate::error::ConfigError;
use log::LevelFilter;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";
pub const DEFAULT_DOH_TIMEOUT_SECS: u64 = 10;

/// Where and how DoH queries are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohSettings {
    pub endpoint: String,
    /// `None` leaves the request without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for DohSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_DOH_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub doh: DohSettings,
    pub server: ServerSettings,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            doh: DohSettings::default(),
            server: ServerSettings::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = get("DOH_ENDPOINT") {
            let endpoint = endpoint.trim().to_string();
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint));
            }
            config.doh.endpoint = endpoint;
        }

        if let Some(raw) = get("DOH_TIMEOUT_SECS") {
            let secs: u64 = parse_number("DOH_TIMEOUT_SECS", &raw)?;
            config.doh.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(host) = get("SERVER_HOST") {
            config.server.host = host.trim().to_string();
        }

        if let Some(raw) = get("SERVER_PORT") {
            config.server.port = parse_number("SERVER_PORT", &raw)?;
        }

        if let Some(raw) = get("LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?;
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
