//! GraphQL endpoint and explorer.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use tracing::instrument;

use crate::state::AppState;

/// Execute a GraphQL query or mutation.
#[instrument(skip_all, fields(operation))]
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    if let Some(name) = &request.operation_name {
        tracing::Span::current().record("operation", name.as_str());
    }

    state.schema().execute(request).await.into()
}

/// Serve the GraphiQL explorer pointed at this endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
