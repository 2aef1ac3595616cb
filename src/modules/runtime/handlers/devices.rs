//! Device listing handler

use axum::{extract::State, Json};

use spyglass_types::DeviceResponse;

use crate::state::AppState;

/// Handler for the device listing endpoint
pub struct DevicesHandler;

impl DevicesHandler {
    /// Handle GET /api/devices
    pub async fn list(State(state): State<AppState>) -> Json<Vec<DeviceResponse>> {
        let devices = state
            .params
            .devices
            .iter()
            .map(|d| d.to_response())
            .collect();
        Json(devices)
    }
}
