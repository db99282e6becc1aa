//! Error types for the Queue store.

use thiserror::Error;

/// Errors that can occur during queue operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    /// The requested queue was not found for this tenant.
    #[error("Queue not found: {0}")]
    NotFound(String),

    /// The rule being queued does not exist for this tenant.
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// The rule is already in the queue.
    #[error("Rule already queued: {0}")]
    AlreadyQueued(String),

    /// The rule is not in the queue.
    #[error("Rule not queued: {0}")]
    NotQueued(String),

    /// The queue data provided is invalid.
    #[error("Queue validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
