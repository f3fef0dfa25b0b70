use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness probe. Reports the DoH endpoint in use without querying it.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "resolver": "https://dns.google/resolve"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(state.resolver_endpoint()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::stub_state;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(stub_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.resolver, "https://dns.google/resolve");
        assert!(!health_response.timestamp.is_empty());
    }
}
