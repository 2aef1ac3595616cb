//! Query submission handler

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::info;

use spyglass_types::{QueryRequest, QueryResponse};

use crate::errors::ApiError;
use crate::state::AppState;

/// Handler for query submission requests
pub struct QueryHandler;

impl QueryHandler {
    /// Handle POST /api/query/
    pub async fn submit(
        State(state): State<AppState>,
        payload: Result<Json<QueryRequest>, JsonRejection>,
    ) -> Result<Json<QueryResponse>, ApiError> {
        let Json(request) = payload.map_err(ApiError::from_rejection)?;
        Self::validate(&state, &request)?;

        info!(
            "Query {} for {} on {}",
            request.query_type, request.query_target, request.query_location
        );

        let response = state.engine.execute(&request).await?;
        Ok(Json(response))
    }

    /// Field-level validation against the deployment configuration
    fn validate(state: &AppState, request: &QueryRequest) -> Result<(), ApiError> {
        if request.query_target.trim().is_empty() {
            return Err(ApiError::validation("query_target", "field required"));
        }
        if state.params.find_device(&request.query_location).is_none() {
            return Err(ApiError::validation(
                "query_location",
                format!("unknown device '{}'", request.query_location),
            ));
        }
        if !state.params.query_enabled(request.query_type) {
            return Err(ApiError::validation(
                "query_type",
                format!("query type '{}' is not enabled", request.query_type),
            ));
        }
        Ok(())
    }
}
