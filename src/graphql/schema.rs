use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::state::AppState;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query: health plus email validation.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with `state` available to every resolver.
///
/// ```rust,no_run
/// use email_doh_validator::config::DohSettings;
/// use email_doh_validator::dns::ReqwestTransport;
/// use email_doh_validator::graphql::schema::create_schema;
/// use email_doh_validator::state::AppState;
/// use std::sync::Arc;
///
/// let settings = DohSettings::default();
/// let transport = ReqwestTransport::new(&settings).unwrap();
/// let schema = create_schema(AppState::new(Arc::new(transport), settings.endpoint));
/// ```
pub fn create_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .data(state)
    .finish()
}
