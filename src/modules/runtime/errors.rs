//! Error-handling pipeline
//!
//! Every failure a route handler can produce is a member of the closed
//! [`ApiError`] taxonomy. The single `IntoResponse` impl is the only place
//! errors become HTTP responses, so clients always receive the same JSON
//! envelope no matter where a request failed.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::error;

use spyglass_core::{EngineError, SpyglassError};
use spyglass_types::ErrorEnvelope;

/// Fixed client-safe text for unanticipated failures
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Check the server logs for details.";

/// Pattern matching serde's "missing field `name`" deserialization error
static MISSING_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"missing field `([A-Za-z0-9_]+)`").unwrap());

/// Request-path error taxonomy
///
/// Closed by design: adding a member forces the dispatch below to be
/// updated, so no error kind can go unhandled.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Explicit protocol-level error carrying its own status
    #[error("{detail}")]
    Http { status: StatusCode, detail: String },

    /// Domain failure raised by the query engine
    #[error("{message}")]
    Application { message: String },

    /// Request payload failed declared-shape validation
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Anything unanticipated; full detail is logged, never echoed
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// 404 with the given detail
    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::Http {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    /// Validation failure for one field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Map a body-extraction rejection to the validation path
    ///
    /// Serde's "missing field" message is rewritten into the field-level
    /// form clients expect; everything else keeps the rejection text.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        if let Some(caps) = MISSING_FIELD.captures(&text) {
            ApiError::validation(&caps[1], "field required")
        } else {
            ApiError::validation("body", text)
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Application {
            message: err.message,
        }
    }
}

impl From<SpyglassError> for ApiError {
    fn from(err: SpyglassError) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::Http { status, detail } => (status, ErrorEnvelope::new("http", detail)),
            ApiError::Application { message } => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("application", message),
            ),
            ApiError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorEnvelope::new("validation", format!("{}: {}", field, message)),
            ),
            ApiError::Internal { message } => {
                // Full cause stays server-side; the client gets fixed text.
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::new("internal", INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}
