//! Query engine contract
//!
//! The device-communication engine is an external collaborator; this module
//! defines the seam the HTTP layer talks through. The engine owns retries,
//! caching, and output parsing. The HTTP layer only translates its terminal
//! failures into responses.

use async_trait::async_trait;
use thiserror::Error;

use spyglass_types::{QueryRequest, QueryResponse};

/// Domain failure raised by the query engine
///
/// Always maps to HTTP 400; the message is safe to echo to clients.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct EngineError {
    /// Client-safe description of the business-rule violation
    pub message: String,
}

impl EngineError {
    /// Create a new engine error with the given client-safe message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for query execution engines
///
/// Implementations communicate with backend devices and return either a
/// complete response or a domain failure. Anything else an implementation
/// does wrong (panic, poisoned state) is handled by the HTTP layer's
/// last-resort internal-error path.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Execute a validated query against its target device
    async fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, EngineError>;
}

/// Engine placeholder used when no real engine has been wired in
///
/// Rejects every query with a domain error so a partially configured
/// deployment still answers with a well-formed envelope.
pub struct UnconfiguredEngine;

#[async_trait]
impl QueryEngine for UnconfiguredEngine {
    async fn execute(&self, _request: &QueryRequest) -> Result<QueryResponse, EngineError> {
        Err(EngineError::new("No query engine is configured"))
    }
}
