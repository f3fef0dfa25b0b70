//! Startup helpers: logger and DoH transport.

use crate::config::DohSettings;
use crate::dns::ReqwestTransport;
use crate::error::InitializationError;
use chrono::{SecondsFormat, Utc};
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initializes `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to everything.
/// HTTP client internals are capped at `info` either way.
///
/// ```bash
/// RUST_LOG=email_doh_validator=debug cargo run
/// ```
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    if env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // try_init so repeated calls (tests) do not panic
    builder.try_init()?;
    Ok(())
}

/// Builds the blocking DoH transport. Call before the async runtime starts.
pub fn init_transport(settings: &DohSettings) -> Result<ReqwestTransport, InitializationError> {
    Ok(ReqwestTransport::new(settings)?)
}
