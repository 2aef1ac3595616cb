//! Runtime type definitions for request/response handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryKind;

/// Query submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Name of the device the query runs against
    pub query_location: String,
    /// Kind of query to run
    pub query_type: QueryKind,
    /// Query target (prefix, address, community, or AS path)
    pub query_target: String,
}

/// Query execution response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Device output, either raw text or structured data
    pub output: serde_json::Value,
    /// Display level hint for the UI
    pub level: String,
    /// Whether the result was served from the collaborator's cache
    pub cached: bool,
    /// Execution time in seconds
    pub runtime: f64,
    /// When the query completed
    pub timestamp: DateTime<Utc>,
    /// Keywords the UI may highlight in the output
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl QueryResponse {
    /// Create a successful response with raw text output
    pub fn text(output: impl Into<String>, runtime: f64) -> Self {
        Self {
            output: serde_json::Value::String(output.into()),
            level: "success".to_string(),
            cached: false,
            runtime,
            timestamp: Utc::now(),
            keywords: Vec::new(),
        }
    }
}

/// One device entry returned by the device listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    /// Unique device name, used as `query_location`
    pub name: String,
    /// Network or site the device belongs to
    pub network: String,
    /// Human-readable device label
    pub display_name: String,
}

/// One query kind entry returned by the supported-queries endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedQueryResponse {
    /// Wire name of the query kind
    pub name: QueryKind,
    /// Human-readable label
    pub display_name: String,
    /// Whether this deployment accepts the query kind
    pub enable: bool,
}

/// Uniform JSON shape wrapping every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always true; lets clients distinguish envelopes from success bodies
    pub error: bool,
    /// Taxonomy member that produced this envelope
    pub error_type: String,
    /// Human-readable cause
    pub message: String,
}

impl ErrorEnvelope {
    /// Create an envelope for the given taxonomy member
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            error_type: error_type.into(),
            message: message.into(),
        }
    }
}
