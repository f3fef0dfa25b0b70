use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Executes a GraphQL request against the shared schema.
///
/// Validation queries resolve domains over DoH; those resolvers hop onto the
/// blocking pool themselves, so this handler stays a plain async call.
///
/// # Arguments
/// - `schema`: the [`AppSchema`] registered as app data, carrying the
///   [`AppState`](crate::state::AppState) every resolver reads
/// - `req`: query, variables and operation name decoded from the body
///
/// # Returns
/// A [`GraphQLResponse`]. Field errors (a missing schema field, a failed
/// blocking task) travel in `errors` with HTTP 200; a failed domain check is
/// data, not an error.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground.
///
/// The page is static HTML whose requests go to `/api/v1/graphql`, so it
/// only works when the routes are mounted under the `/api/v1` scope.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}
