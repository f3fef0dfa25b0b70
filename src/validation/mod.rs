/// Options for the DoH domain check.
///
/// [`EmailByDoh`](constraint::EmailByDoh) carries the failure message and the
/// two check flags:
/// - `check_mx`: require an MX record (takes priority)
/// - `check_host`: require an A record, used only when `check_mx` is off
///
/// # Example
/// ```
/// use email_doh_validator::validation::constraint::EmailByDoh;
///
/// let constraint = EmailByDoh::default();
/// assert!(constraint.check_mx && constraint.check_host);
/// ```
pub mod constraint;

/// Validates the domain of an email address by querying DNS over HTTPS.
///
/// The host is everything after the last `@`. With `check_mx` the host must
/// publish an MX record, otherwise with `check_host` an A record. A failed
/// check yields one [`Violation`](violation::Violation); empty input is
/// skipped.
///
/// # Example
/// ```no_run
/// use email_doh_validator::config::DohSettings;
/// use email_doh_validator::dns::ReqwestTransport;
/// use email_doh_validator::validation::constraint::EmailByDoh;
/// use email_doh_validator::validation::email_doh::EmailDohValidator;
/// use std::sync::Arc;
///
/// let transport = ReqwestTransport::new(&DohSettings::default()).unwrap();
/// let mut validator = EmailDohValidator::new(Arc::new(transport));
///
/// assert!(validator.validate_str("user@gmail.com", &EmailByDoh::default()).is_none());
/// assert!(validator.validate_str("user@x1hirotae.com", &EmailByDoh::default()).is_some());
/// ```
pub mod email_doh;

/// Diagnostic produced by a failed check: message template plus the quoted
/// offending value under the `{{ value }}` parameter.
pub mod violation;

pub use constraint::EmailByDoh;
pub use email_doh::{EmailDohValidator, ValidationResult, extract_host};
pub use violation::Violation;
