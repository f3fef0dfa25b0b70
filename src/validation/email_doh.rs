use super::constraint::EmailByDoh;
use super::violation::Violation;
use crate::dns::{DohResolver, DohTransport};
use crate::error::ValidationError;
use log::debug;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Outcome of validating one value: `Ok(None)` passes (or was skipped).
pub type ValidationResult = Result<Option<Violation>, ValidationError>;

/// Checks that the domain of an email address resolves over DoH.
///
/// One validator is one validation pass. Its resolver cache lives exactly
/// as long as the validator, so build a fresh one per request.
pub struct EmailDohValidator {
    resolver: DohResolver,
}

impl EmailDohValidator {
    pub fn new(transport: Arc<dyn DohTransport>) -> Self {
        Self {
            resolver: DohResolver::new(transport),
        }
    }

    /// Validates an arbitrary JSON form value.
    ///
    /// `null` and `""` are skipped so that required-ness stays with the
    /// caller. Arrays and objects have no string form and are a usage error.
    pub fn validate(&mut self, value: &Value, constraint: &EmailByDoh) -> ValidationResult {
        match value_as_str(value)? {
            Some(text) => Ok(self.check_domain(&text, constraint)),
            None => Ok(None),
        }
    }

    pub fn validate_str(&mut self, value: &str, constraint: &EmailByDoh) -> Option<Violation> {
        if value.is_empty() {
            return None;
        }
        self.check_domain(value, constraint)
    }

    /// Runs the enabled DNS check without the empty-value shortcut.
    fn check_domain(&mut self, value: &str, constraint: &EmailByDoh) -> Option<Violation> {
        let host = extract_host(value);

        // MX takes priority; the host check only runs when MX is off
        let passed = if constraint.check_mx {
            self.check_mx_by_doh(host)
        } else if constraint.check_host {
            self.check_host_by_doh(host)
        } else {
            true
        };

        if passed {
            None
        } else {
            debug!("Domain check failed for {value}");
            Some(Violation::new(&constraint.message, value))
        }
    }

    /// Validates several values in the same pass, sharing the record cache.
    pub fn validate_many<'a, I>(
        &mut self,
        values: I,
        constraint: &EmailByDoh,
    ) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .map(|value| self.validate(value, constraint))
            .collect()
    }

    pub fn check_mx_by_doh(&mut self, host: &str) -> bool {
        self.resolver.check_mx(host)
    }

    pub fn check_host_by_doh(&mut self, host: &str) -> bool {
        self.resolver.check_host(host)
    }

    pub fn resolver(&self) -> &DohResolver {
        &self.resolver
    }
}

/// Host part of an email-like string: everything after the last `@`.
///
/// Without an `@` the whole string is taken as the host.
pub fn extract_host(value: &str) -> &str {
    value.rsplit_once('@').map_or(value, |(_, host)| host)
}

fn value_as_str(value: &Value) -> Result<Option<Cow<'_, str>>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(Cow::Borrowed(s.as_str()))),
        Value::Number(n) => Ok(Some(Cow::Owned(n.to_string()))),
        // Scalar string cast: `true` is "1", `false` is "" (checked, not skipped)
        Value::Bool(true) => Ok(Some(Cow::Borrowed("1"))),
        Value::Bool(false) => Ok(Some(Cow::Borrowed(""))),
        Value::Array(_) => Err(ValidationError::UnexpectedValue {
            expected: "string",
            given: "array",
        }),
        Value::Object(_) => Err(ValidationError::UnexpectedValue {
            expected: "string",
            given: "object",
        }),
    }
}
