use crate::error::ValidationError;
use crate::validation::{EmailByDoh, ValidationResult, Violation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const VALID_STATUS: &str = "VALID";
pub const VALID_MESSAGE: &str = "This is a valid email address.";
pub const INVALID_DOMAIN: &str = "INVALID_DOMAIN";
pub const UNEXPECTED_VALUE: &str = "UNEXPECTED_VALUE";

/// Body of `POST /validate-email`.
///
/// `email` is any JSON value: `null`, a missing field and `""` are skipped,
/// arrays and objects are rejected as unexpected.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "user@gmail.com")]
    pub email: Value,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    #[schema(value_type = Vec<String>)]
    pub emails: Vec<Value>,
}

/// Query string toggles for the domain check. Unset flags default to on.
#[derive(Debug, Default, Deserialize)]
pub struct ValidationQuery {
    pub check_mx: Option<bool>,
    pub check_host: Option<bool>,
}

impl ValidationQuery {
    pub fn into_constraint(self) -> EmailByDoh {
        let defaults = EmailByDoh::default();
        EmailByDoh {
            check_mx: self.check_mx.unwrap_or(defaults.check_mx),
            check_host: self.check_host.unwrap_or(defaults.check_host),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmailValidationError {
    pub code: String,
    pub message: String,
    /// Offending value as displayed in the diagnostic
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmailValidationResponse {
    pub is_valid: bool,
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<EmailValidationError>,
}

impl EmailValidationResponse {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            status: Some(VALID_STATUS.to_string()),
            message: Some(VALID_MESSAGE.to_string()),
            error: None,
        }
    }

    pub fn invalid_domain(violation: &Violation) -> Self {
        Self::failure(EmailValidationError {
            code: INVALID_DOMAIN.to_string(),
            message: violation.message(),
            value: Some(violation.invalid_value().to_string()),
        })
    }

    pub fn unexpected_value(err: &ValidationError) -> Self {
        Self::failure(EmailValidationError {
            code: UNEXPECTED_VALUE.to_string(),
            message: err.to_string(),
            value: None,
        })
    }

    fn failure(error: EmailValidationError) -> Self {
        Self {
            is_valid: false,
            status: None,
            message: None,
            error: Some(error),
        }
    }
}

impl From<&ValidationResult> for EmailValidationResponse {
    fn from(result: &ValidationResult) -> Self {
        match result {
            Ok(None) => Self::valid(),
            Ok(Some(violation)) => Self::invalid_domain(violation),
            Err(err) => Self::unexpected_value(err),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkEmailValidationResult {
    #[schema(value_type = String)]
    pub email: Value,
    pub validation: EmailValidationResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkEmailValidationResponse {
    pub results: Vec<BulkEmailValidationResult>,
    pub valid_count: i32,
    pub invalid_count: i32,
}

impl BulkEmailValidationResponse {
    pub fn from_results(emails: Vec<Value>, results: &[ValidationResult]) -> Self {
        let mut valid_count = 0;
        let mut invalid_count = 0;

        let results = emails
            .into_iter()
            .zip(results)
            .map(|(email, result)| {
                let validation = EmailValidationResponse::from(result);
                if validation.is_valid {
                    valid_count += 1;
                } else {
                    invalid_count += 1;
                }
                BulkEmailValidationResult { email, validation }
            })
            .collect();

        Self {
            results,
            valid_count,
            invalid_count,
        }
    }
}
