//! Shared runtime application state (HTTP handlers)

use serde_json::Value;
use std::sync::Arc;

use spyglass_core::{Params, QueryEngine};

/// Application state shared across handlers.
///
/// Everything here is written once during assembly and read-only for the
/// rest of the process, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Deployment configuration
    pub params: Arc<Params>,
    /// Query-execution collaborator
    pub engine: Arc<dyn QueryEngine>,
    /// Cached schema document; `None` when documentation is disabled
    pub schema: Option<Arc<Value>>,
}

impl AppState {
    /// Create the shared state
    pub fn new(
        params: Arc<Params>,
        engine: Arc<dyn QueryEngine>,
        schema: Option<Arc<Value>>,
    ) -> Self {
        Self {
            params,
            engine,
            schema,
        }
    }
}
