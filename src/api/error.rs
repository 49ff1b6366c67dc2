//! API error types for the Reflective Journal REST API client.

use thiserror::Error;

/// API-specific error type for the Reflective Journal REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest (DNS, connection refused, timeout)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    ///
    /// The message is the backend-supplied `detail` when the error body
    /// carries one, otherwise `"Error {status}: {statusText}"`. Display
    /// prints the message verbatim so callers can surface it directly.
    #[error("{message}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// JSON deserialization error on a nominally successful response
    #[error("failed to decode response body: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// The HTTP status code, if this error originated from a response status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body format used by the backend.
///
/// FastAPI-style: `{"detail": "..."}`. A `detail` of any other shape fails
/// the parse and the caller falls back to the generic status message.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    #[serde(default)]
    pub detail: Option<String>,
}
