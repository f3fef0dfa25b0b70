use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`: service status, timestamp and the DoH endpoint in use.
pub mod health;

/// # Email Validation Endpoints
///
/// Verifies that the domain of an email address has DNS records, looked up
/// over DNS-over-HTTPS:
/// - `POST /validate-email`: one value
/// - `POST /validate-emails-bulk`: many values in one validation pass
///
/// `check_mx` / `check_host` query flags select the record type; MX wins
/// when both are on.
pub mod email;

/// # GraphQL Endpoints
///
/// `POST /graphql` and the `GET /playground` UI.
pub mod graphql;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api/v1` base path.
///
/// ```text
/// GET  /api/v1/health
/// POST /api/v1/validate-email
/// POST /api/v1/validate-emails-bulk
/// POST /api/v1/graphql
/// GET  /api/v1/playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(graphql::configure_routes),
    );
}
