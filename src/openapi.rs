use utoipa::OpenApi;

/// OpenAPI document for the REST surface.
///
/// Served as JSON at `/api-docs/openapi.json` and rendered by Swagger UI at
/// `/swagger-ui/`. GraphQL has its own introspection and is only listed as
/// a tag.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::EmailValidationError,
            crate::models::email::EmailValidationResponse,
            crate::models::email::BulkEmailValidationResult,
            crate::models::email::BulkEmailValidationResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email domain checks over DNS-over-HTTPS"),
        (name = "GraphQL", description = "GraphQL API exposing the same checks")
    ),
    info(
        description = "Checks that email domains carry MX or A records, resolved through a DNS-over-HTTPS JSON endpoint",
        title = "Email DoH Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
