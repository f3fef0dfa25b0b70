use crate::models::health::HealthResponse;
use crate::state::AppState;
use async_graphql::{Context, Object, Result, SimpleObject};

/// GraphQL view of the REST health payload.
#[derive(Debug, SimpleObject)]
pub struct Health {
    /// "UP" while the service answers
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
    /// DoH endpoint domain checks are sent to
    pub resolver: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            resolver: response.resolver,
        }
    }
}

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Service liveness; does not contact the resolver
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let state = ctx.data::<AppState>()?;
        Ok(Health::from(HealthResponse::up(state.resolver_endpoint())))
    }
}
