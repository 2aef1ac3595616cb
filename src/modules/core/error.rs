//! Error types for Spyglass

use thiserror::Error;

/// Main error type for Spyglass process-level operations
///
/// Request-path failures use the closed `ApiError` taxonomy in the runtime
/// crate; this type covers everything that happens outside a request:
/// configuration loading, documentation assembly, and server lifecycle.
#[derive(Error, Debug)]
pub enum SpyglassError {
    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Code sample template loading error (fatal at startup)
    #[error("Template error: {0}")]
    Template(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// Lifecycle hook failure
    #[error("Lifecycle error during {phase}: {message}")]
    Lifecycle { phase: &'static str, message: String },

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SpyglassError
pub type Result<T> = std::result::Result<T, SpyglassError>;
