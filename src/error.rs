//! Error types shared across the crate.
//!
//! Lookup failures never leave the resolver as errors: they are logged and
//! collapsed into a negative answer. The other enums surface to callers.

use thiserror::Error;

/// Why a DoH lookup produced no usable record set.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never completed (connect, TLS, timeout, body read).
    #[error("DoH request failed: {0}")]
    Transport(String),

    /// The resolver answered with something other than 200 OK.
    #[error("DoH server returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was missing or not the expected JSON document.
    #[error("DoH response could not be decoded: {0}")]
    Decode(String),

    /// The DNS-level `Status` was not NOERROR.
    #[error("DNS query failed with status {0}")]
    DnsStatus(i64),

    /// `Answer` was absent or not a list.
    #[error("DoH response has no answer section")]
    MissingAnswer,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// A caller handed the validator something that has no string form.
///
/// This is a programming error in the integrating code, not a user-facing
/// validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected argument of type \"{expected}\", \"{given}\" given")]
    UnexpectedValue {
        expected: &'static str,
        given: &'static str,
    },
}

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("DoH endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Startup failures surfaced from `main`.
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
