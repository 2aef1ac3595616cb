//! CORS policy
//!
//! The allowed-origin set is computed once at startup from configuration
//! and never changes. Only listed origins receive permissive headers;
//! methods are restricted to the verbs the functional routes use.

use axum::http::{header::HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use spyglass_core::{Params, SpyglassError};

/// Extra origin allowed when developer mode is enabled
pub const DEV_ORIGIN: &str = "http://localhost:3000";

/// Compute the ordered allowed-origin set for a configuration
pub fn cors_origins(params: &Params) -> Vec<String> {
    let mut origins = params.cors_origins.clone();
    if params.developer_mode {
        origins.push(DEV_ORIGIN.to_string());
    }
    origins
}

/// Build the CORS middleware layer for a configuration
pub fn cors_layer(params: &Params) -> Result<CorsLayer, SpyglassError> {
    let origins = cors_origins(params)
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| SpyglassError::Config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}
