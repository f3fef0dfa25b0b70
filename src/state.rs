use crate::dns::DohTransport;
use crate::validation::EmailDohValidator;
use std::sync::Arc;

/// Shared application state handed to REST and GraphQL handlers.
///
/// Only the transport is shared. Every request builds its own validator, so
/// record caches never outlive a single validation pass.
#[derive(Clone)]
pub struct AppState {
    transport: Arc<dyn DohTransport>,
    resolver_endpoint: String,
}

impl AppState {
    pub fn new(transport: Arc<dyn DohTransport>, resolver_endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            resolver_endpoint: resolver_endpoint.into(),
        }
    }

    /// Starts a new validation pass with an empty record cache.
    pub fn validator(&self) -> EmailDohValidator {
        EmailDohValidator::new(Arc::clone(&self.transport))
    }

    pub fn resolver_endpoint(&self) -> &str {
        &self.resolver_endpoint
    }
}

/// Canned DoH answers for handler tests:
/// - `gmail.com`: MX and A
/// - `web.example`: A only
/// - `down.example`: HTTP 500
/// - anything else: NXDOMAIN
#[cfg(test)]
pub(crate) fn stub_state() -> AppState {
    use crate::dns::{DohResponse, MockDohTransport};
    use crate::error::LookupError;
    use serde_json::json;

    let mut mock = MockDohTransport::new();
    mock.expect_query().returning(|host| {
        let body = match host {
            "gmail.com" => json!({
                "Status": 0,
                "Answer": [
                    { "name": "gmail.com.", "type": 15, "TTL": 3600, "data": "5 gmail-smtp-in.l.google.com." },
                    { "name": "gmail.com.", "type": 1, "TTL": 300, "data": "142.250.196.101" }
                ]
            }),
            "web.example" => json!({
                "Status": 0,
                "Answer": [{ "name": "web.example.", "type": 1, "TTL": 300, "data": "192.0.2.10" }]
            }),
            "down.example" => return Err(LookupError::HttpStatus(500)),
            _ => json!({ "Status": 3 }),
        };
        Ok(serde_json::from_value::<DohResponse>(body).unwrap())
    });

    AppState::new(Arc::new(mock), "https://dns.google/resolve")
}
