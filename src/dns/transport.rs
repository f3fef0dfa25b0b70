//! HTTP side of the DoH lookup.
//!
//! Queries use the JSON flavour of DNS-over-HTTPS:
//! ```text
//! GET /resolve?name=example.com&type=255&do=true HTTP/1.1
//! Accept: application/dns-json
//! ```

use super::record_type::ANY_TYPE;
use super::response::DohResponse;
use crate::config::DohSettings;
use crate::error::LookupError;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Sends one "all records" query for a host and returns the decoded body.
///
/// Implementations must not retry and must not cache.
#[cfg_attr(test, mockall::automock)]
pub trait DohTransport: Send + Sync {
    fn query(&self, host: &str) -> Result<DohResponse, LookupError>;
}

/// Blocking `reqwest` transport against a JSON DoH endpoint.
///
/// Build it outside of an async runtime; the blocking client owns its own.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: String,
}

impl ReqwestTransport {
    pub fn new(settings: &DohSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DohTransport for ReqwestTransport {
    fn query(&self, host: &str) -> Result<DohResponse, LookupError> {
        let any_type = ANY_TYPE.to_string();
        debug!("Sending DoH query for {host} to {}", self.endpoint);

        // `do=true` asks for DNSSEC data; the AD bit is only ever logged
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE)
            .query(&[("name", host), ("type", any_type.as_str()), ("do", "true")])
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes()?;
        let parsed = DohResponse::from_slice(&body)?;
        debug!(
            "DoH response for {host}: status={:?} ad={}",
            parsed.status, parsed.authenticated_data
        );
        Ok(parsed)
    }
}
