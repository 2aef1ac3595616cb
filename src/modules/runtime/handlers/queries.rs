//! Supported-query listing handler

use axum::{extract::State, Json};

use spyglass_types::SupportedQueryResponse;

use crate::state::AppState;

/// Handler for the supported-query listing endpoint
pub struct QueriesHandler;

impl QueriesHandler {
    /// Handle GET /api/queries
    pub async fn list(State(state): State<AppState>) -> Json<Vec<SupportedQueryResponse>> {
        let queries = state
            .params
            .query_types()
            .iter()
            .map(|q| q.to_response())
            .collect();
        Json(queries)
    }
}
