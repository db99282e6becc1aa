//! Error types for the Rule store.

use thiserror::Error;

use crate::model::RuleStatus;

/// Errors that can occur during rule operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    /// The requested rule was not found for this tenant.
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// The rule data provided is invalid.
    #[error("Rule validation error: {0}")]
    ValidationError(String),

    /// The requested status change is not allowed.
    #[error("Cannot move rule from {from:?} to {to:?}")]
    InvalidTransition { from: RuleStatus, to: RuleStatus },

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
