//! Error types for the Prompt store.

use thiserror::Error;

/// Errors that can occur during prompt operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PromptError {
    /// The requested prompt was not found for this tenant.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// The rule a prompt should attach to does not exist for this tenant.
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// The prompt data provided is invalid.
    #[error("Prompt validation error: {0}")]
    ValidationError(String),

    /// Prompts have no custom actions.
    #[error("Unsupported prompt action")]
    UnsupportedAction,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
