use thiserror::Error;

use crate::framework::FrameworkError;
use crate::registry::RegistryError;

/// Errors surfaced by [`ActionRouter`](super::ActionRouter).
#[derive(Debug, Error)]
pub enum RouterError {
    /// No registered resource accepts this action name.
    #[error("Action not found: {0}")]
    ActionNotFound(String),

    /// The payload does not decode into a request for the target model.
    #[error("Invalid payload for {operation}: {reason}")]
    InvalidPayload { operation: String, reason: String },

    /// The store rejected or failed the request. Passed through unchanged.
    #[error(transparent)]
    Storage(#[from] FrameworkError),

    #[error("Failed to serialize result: {0}")]
    Serialization(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// [`ServerActionClient::create`](crate::clients::ServerActionClient::create)
    /// was called before a router was installed.
    #[error("No action router installed")]
    RouterNotInstalled,
}
