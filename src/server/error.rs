//! Error types for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::framework::FrameworkError;
use crate::router::RouterError;
use crate::session_actor::SessionError;

/// Server error type. The message is the `error` field of the response body.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing, unknown or expired session.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The request names something that is not unique.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RouterError> for ServerError {
    fn from(e: RouterError) -> Self {
        match e {
            RouterError::ActionNotFound(_) => ServerError::NotFound(e.to_string()),
            RouterError::InvalidPayload { .. } => ServerError::BadRequest(e.to_string()),
            RouterError::Storage(FrameworkError::NotFound(_)) => {
                ServerError::NotFound(e.to_string())
            }
            // A model refused the request (validation, bad transition).
            RouterError::Storage(FrameworkError::EntityError(_)) => {
                ServerError::BadRequest(e.to_string())
            }
            _ => ServerError::Internal(e.to_string()),
        }
    }
}

impl From<SessionError> for ServerError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::StoreCommunicationError(_) => ServerError::Internal(e.to_string()),
            _ => ServerError::Unauthorized(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Server error");
        } else {
            tracing::warn!(status = %status, error = %message, "Client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
