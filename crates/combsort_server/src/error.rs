//! Error types for the sort server.

use crate::wire::ErrorBody;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::time::Duration;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the sort server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid request format or content.
    #[error("{0}")]
    InvalidRequest(String),

    /// Too many values in one request.
    #[error("array too large: {len} values, at most {max} allowed")]
    PayloadTooLarge {
        /// Number of values received.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Request body exceeds the configured byte limit.
    #[error("{0}")]
    BodyTooLarge(String),

    /// Request body is not declared as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Missing, malformed or expired credentials.
    #[error("not authorized: {0}")]
    NotAuthorized(String),

    /// The sort did not finish before the deadline.
    #[error("sort did not finish within {0:?}")]
    Timeout(Duration),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServerError::InvalidRequest(_)
                | ServerError::PayloadTooLarge { .. }
                | ServerError::BodyTooLarge(_)
                | ServerError::UnsupportedMediaType(_)
                | ServerError::NotAuthorized(_)
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            ServerError::Timeout(_) | ServerError::Internal(_) | ServerError::Io(_)
        )
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge { .. } | ServerError::BodyTooLarge(_) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Internal(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ServerError::BodyTooLarge(message),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => ServerError::UnsupportedMediaType(message),
            _ => ServerError::InvalidRequest(message),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
