use actix_web::{App, HttpServer, web::Data};
use email_doh_validator::config::AppConfig;
use email_doh_validator::dns::DohTransport;
use email_doh_validator::error::InitializationError;
use email_doh_validator::graphql::schema::create_schema;
use email_doh_validator::initialization::{init_logger, init_transport};
use email_doh_validator::openapi::ApiDoc;
use email_doh_validator::state::AppState;
use log::info;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email DoH Validator entry point
///
/// Reads configuration from the environment (and `.env` if present), sets up
/// logging, builds the DoH client and serves:
/// - REST: `/api/v1/health`, `/api/v1/validate-email`, `/api/v1/validate-emails-bulk`
/// - GraphQL: `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`, OpenAPI JSON at `/api-docs/openapi.json`
///
/// The blocking HTTP client is created before the actix runtime starts and
/// `main` holds a handle to it, so it is also dropped outside the runtime.
fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(InitializationError::from)
        .map_err(to_io_error)?;
    init_logger(config.log_level).map_err(to_io_error)?;

    let transport = Arc::new(init_transport(&config.doh).map_err(to_io_error)?);
    let endpoint = transport.endpoint().to_string();
    let shared: Arc<dyn DohTransport> = transport.clone();
    let state = AppState::new(shared, endpoint.clone());
    let schema = create_schema(state.clone());

    let bind = (config.server.host.clone(), config.server.port);
    info!(
        "Starting server on {}:{} (resolver: {})",
        bind.0, bind.1, endpoint
    );

    let result = actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let openapi = ApiDoc::openapi();

            App::new()
                .app_data(Data::new(state.clone()))
                .app_data(Data::new(schema.clone()))
                .configure(email_doh_validator::routes::configure)
                .service(
                    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
                )
        })
        .bind(bind)?
        .run()
        .await
    });

    info!("Server stopped");
    drop(transport);
    result
}

fn to_io_error(err: InitializationError) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
