use crate::models::email as rest;
use crate::state::AppState;
use crate::validation::{EmailByDoh, ValidationResult};
use async_graphql::{Context, Error, Object, Result, SimpleObject};
use log::info;
use serde_json::Value;

/// Why an email failed the domain check
///
/// - `INVALID_DOMAIN`: the domain lacks the required DNS record
/// - `UNEXPECTED_VALUE`: the input was not a scalar
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct EmailValidationError {
    /// INVALID_DOMAIN or UNEXPECTED_VALUE
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending value, quoted and truncated for display
    pub value: Option<String>,
}

/// Outcome of validating one email
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct EmailValidationResponse {
    pub is_valid: bool,
    /// "VALID" when the check passed
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<EmailValidationError>,
}

#[derive(SimpleObject)]
pub struct BulkEmailValidationResult {
    pub email: String,
    pub validation: EmailValidationResponse,
}

#[derive(SimpleObject)]
pub struct BulkEmailValidationResponse {
    pub results: Vec<BulkEmailValidationResult>,
    pub valid_count: i32,
    pub invalid_count: i32,
}

impl From<rest::EmailValidationError> for EmailValidationError {
    fn from(error: rest::EmailValidationError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            value: error.value,
        }
    }
}

impl From<rest::EmailValidationResponse> for EmailValidationResponse {
    fn from(response: rest::EmailValidationResponse) -> Self {
        Self {
            is_valid: response.is_valid,
            status: response.status,
            message: response.message,
            error: response.error.map(Into::into),
        }
    }
}

impl From<&ValidationResult> for EmailValidationResponse {
    fn from(result: &ValidationResult) -> Self {
        rest::EmailValidationResponse::from(result).into()
    }
}

fn constraint_from(check_mx: Option<bool>, check_host: Option<bool>) -> EmailByDoh {
    rest::ValidationQuery {
        check_mx,
        check_host,
    }
    .into_constraint()
}

fn blocking_error(err: tokio::task::JoinError) -> Error {
    Error::new(format!("DNS validation error: {}", err))
}

/// Email domain validation queries
#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Checks that the email's domain has an MX record, or an A record when
    /// `checkMx` is false. A missing or empty email is reported valid.
    async fn validate_email(
        &self,
        ctx: &Context<'_>,
        email: Option<String>,
        check_mx: Option<bool>,
        check_host: Option<bool>,
    ) -> Result<EmailValidationResponse> {
        let state = ctx.data::<AppState>()?.clone();
        let constraint = constraint_from(check_mx, check_host);
        let value = email.map(Value::String).unwrap_or(Value::Null);

        let result = tokio::task::spawn_blocking(move || {
            state.validator().validate(&value, &constraint)
        })
        .await
        .map_err(blocking_error)?;

        Ok(EmailValidationResponse::from(&result))
    }

    /// Validates a batch in one pass; repeated domains are looked up once.
    async fn validate_emails_bulk(
        &self,
        ctx: &Context<'_>,
        emails: Vec<String>,
        check_mx: Option<bool>,
        check_host: Option<bool>,
    ) -> Result<BulkEmailValidationResponse> {
        let state = ctx.data::<AppState>()?.clone();
        let constraint = constraint_from(check_mx, check_host);

        let (emails, results) = tokio::task::spawn_blocking(move || {
            let values: Vec<Value> = emails.iter().cloned().map(Value::String).collect();
            let mut validator = state.validator();
            let results = validator.validate_many(&values, &constraint);
            info!(
                "Bulk validation of {} values resolved {} hosts",
                values.len(),
                validator.resolver().cache().len()
            );
            (emails, results)
        })
        .await
        .map_err(blocking_error)?;

        let mut valid_count = 0;
        let mut invalid_count = 0;
        let results = emails
            .into_iter()
            .zip(results.iter())
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

        Ok(BulkEmailValidationResponse {
            results,
            valid_count,
            invalid_count,
        })
    }
}
