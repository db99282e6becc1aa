//! Error types for the Execution store.

use thiserror::Error;

use crate::model::ExecutionStatus;

/// Errors that can occur during execution operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    /// The requested execution was not found for this tenant.
    #[error("Execution not found: {0}")]
    NotFound(String),

    /// The execution request is invalid.
    #[error("Execution validation error: {0}")]
    ValidationError(String),

    /// The rule does not exist for this tenant.
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// A prompt does not exist or belongs to another rule.
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    /// Executions are only changed through their actions.
    #[error("Executions cannot be updated directly")]
    Immutable,

    /// The execution link expired before it was started.
    #[error("Execution expired: {0}")]
    Expired(String),

    /// The action does not apply in the current status.
    #[error("Cannot {action} an execution that is {status:?}")]
    InvalidTransition {
        action: &'static str,
        status: ExecutionStatus,
    },

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
