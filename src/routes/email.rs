use crate::models::email::{
    BulkEmailRequest, BulkEmailValidationResponse, EmailRequest, EmailValidationResponse,
    ValidationQuery,
};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, post, web};
use log::info;

/// # Email Validation Endpoint
///
/// Checks that the domain of an email address has DNS records, using a
/// DNS-over-HTTPS lookup:
/// 1. MX record check (`check_mx`, on by default)
/// 2. A record check (`check_host`), only when `check_mx=false`
///
/// Empty or `null` values are accepted as-is; required-ness is left to the
/// client.
///
/// ## Responses
/// - **200 OK**: Domain passed the check (or the value was empty)
/// - **400 Bad Request**: `INVALID_DOMAIN`, the domain lacks the record
/// - **422 Unprocessable Entity**: `UNEXPECTED_VALUE`, `email` was an array or object
///
/// ## Example Request
/// ```text
/// POST /api/v1/validate-email?check_mx=false&check_host=true
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    params(
        ("check_mx" = Option<bool>, Query, description = "Require an MX record (default true)"),
        ("check_host" = Option<bool>, Query, description = "Require an A record when check_mx is false (default true)")
    ),
    responses(
        (status = 200, description = "Email domain is valid", body = EmailValidationResponse),
        (status = 400, description = "Email domain has no matching DNS record", body = EmailValidationResponse),
        (status = 422, description = "Email value is not a string", body = EmailValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    query: web::Query<ValidationQuery>,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    let constraint = query.into_inner().into_constraint();
    let value = req.into_inner().email;
    let state = state.get_ref().clone();

    // DoH lookups block; keep them off the async workers
    let result = web::block(move || {
        let mut validator = state.validator();
        validator.validate(&value, &constraint)
    })
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("DNS validation error: {}", e))
    })?;

    let response = EmailValidationResponse::from(&result);
    Ok(match result {
        Ok(None) => HttpResponse::Ok().json(response),
        Ok(Some(_)) => HttpResponse::BadRequest().json(response),
        Err(_) => HttpResponse::UnprocessableEntity().json(response),
    })
}

/// # Bulk Email Validation Endpoint
///
/// Runs the same check as `/validate-email` for every address in one
/// validation pass, so addresses sharing a domain cost a single lookup.
/// Always answers 200 with per-address results and counts.
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    params(
        ("check_mx" = Option<bool>, Query, description = "Require an MX record (default true)"),
        ("check_host" = Option<bool>, Query, description = "Require an A record when check_mx is false (default true)")
    ),
    responses(
        (status = 200, description = "Bulk validation results", body = BulkEmailValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    query: web::Query<ValidationQuery>,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    let constraint = query.into_inner().into_constraint();
    let emails = req.into_inner().emails;
    let state = state.get_ref().clone();

    let (emails, results) = web::block(move || {
        let mut validator = state.validator();
        let results = validator.validate_many(&emails, &constraint);
        info!(
            "Bulk validation of {} values resolved {} hosts",
            emails.len(),
            validator.resolver().cache().len()
        );
        (emails, results)
    })
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("DNS validation error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(BulkEmailValidationResponse::from_results(
        emails, &results,
    )))
}

/// Configures email validation routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_emails_bulk);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::stub_state;
    use actix_web::{App, test};
    use serde_json::json;

    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(stub_state()))
                .configure(configure_routes),
        )
        .await
    }

    #[actix_web::test]
    async fn test_valid_email() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": "user@gmail.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["is_valid"], true);
        assert_eq!(body["status"], "VALID");
        assert_eq!(body["message"], "This is a valid email address.");
    }

    #[actix_web::test]
    async fn test_invalid_domain() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": "user@x1hirotae.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["is_valid"], false);
        assert_eq!(body["error"]["code"], "INVALID_DOMAIN");
        assert_eq!(
            body["error"]["message"],
            "This value is not a valid email address."
        );
        assert_eq!(body["error"]["value"], "\"user@x1hirotae.com\"");
    }

    #[actix_web::test]
    async fn test_empty_email_is_skipped() {
        let app = create_test_app().await;
        for payload in [json!({ "email": "" }), json!({ "email": null }), json!({})] {
            let req = test::TestRequest::post()
                .uri("/validate-email")
                .set_json(payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);
        }
    }

    #[actix_web::test]
    async fn test_non_string_email_is_unprocessable() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": { "address": "user@gmail.com" } }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNEXPECTED_VALUE");
    }

    #[actix_web::test]
    async fn test_host_check_only_when_mx_disabled() {
        let app = create_test_app().await;

        // A record but no MX: fails the default MX check
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": "user@web.example" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let req = test::TestRequest::post()
            .uri("/validate-email?check_mx=false")
            .set_json(json!({ "email": "user@web.example" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[actix_web::test]
    async fn test_no_checks_enabled() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email?check_mx=false&check_host=false")
            .set_json(json!({ "email": "user@x1hirotae.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[actix_web::test]
    async fn test_resolver_outage_fails_closed() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email")
            .set_json(json!({ "email": "user@down.example" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_invalid_query_flag_is_rejected() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-email?check_mx=maybe")
            .set_json(json!({ "email": "user@gmail.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_mixed_results() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-emails-bulk")
            .set_json(json!({
                "emails": ["a@gmail.com", "b@gmail.com", "c@x1hirotae.com", "", ["d@gmail.com"]]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(body["valid_count"], 3);
        assert_eq!(body["invalid_count"], 2);

        assert_eq!(results[2]["email"], "c@x1hirotae.com");
        assert_eq!(results[2]["validation"]["error"]["code"], "INVALID_DOMAIN");
        assert_eq!(results[4]["validation"]["error"]["code"], "UNEXPECTED_VALUE");
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_empty_array() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-emails-bulk")
            .set_json(json!({ "emails": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
        assert_eq!(body["valid_count"], 0);
        assert_eq!(body["invalid_count"], 0);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_requires_emails_field() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate-emails-bulk")
            .set_json(json!({ "email": "a@gmail.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }
}
