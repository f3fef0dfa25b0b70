use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// DoH endpoint used for domain checks
    pub resolver: String,
}

impl HealthResponse {
    pub fn up(resolver: &str) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            resolver: resolver.to_string(),
        }
    }
}
