/// # Health Status Response
///
/// Operational status of the service with a timestamp and the DoH endpoint
/// domain checks are sent to.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "resolver": "https://dns.google/resolve"
/// }
/// ```
pub mod health;

/// # Email Validation Payloads
///
/// Request bodies, query options and response bodies of the REST validation
/// endpoints, plus the mapping from a validation outcome to a response.
pub mod email;

pub use email::{
    BulkEmailRequest, BulkEmailValidationResponse, BulkEmailValidationResult, EmailRequest,
    EmailValidationError, EmailValidationResponse, ValidationQuery,
};
pub use health::HealthResponse;
