use crate::graphql::handlers;
use actix_web::web;

/// GraphQL Route Configuration
///
/// Registers the two GraphQL resources relative to the enclosing scope:
/// - `POST /graphql`: executes `health`, `validateEmail` and
///   `validateEmailsBulk` against the [`AppSchema`](crate::graphql::schema::AppSchema)
///   found in app data
/// - `GET /playground`: interactive UI that posts back to `/api/v1/graphql`
///
/// Only `POST` is routed for `/graphql`; other methods get actix's 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").route(web::post().to(handlers::graphql_handler)))
        .service(web::resource("/playground").route(web::get().to(handlers::graphql_playground)));
}
