//! Error types for the Session store.

use thiserror::Error;

/// Errors that can occur while resolving or managing sessions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Unknown session")]
    Unknown,

    #[error("Session expired")]
    Expired,

    #[error("Session revoked")]
    Revoked,

    /// The session data provided is invalid.
    #[error("Session validation error: {0}")]
    ValidationError(String),

    /// Sessions are only changed by revoking them.
    #[error("Sessions cannot be updated directly")]
    Immutable,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
