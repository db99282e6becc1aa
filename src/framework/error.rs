//! # Framework Errors
//!
//! Failures of the storage plumbing itself, as opposed to a model rejecting a
//! request. Model errors travel inside [`FrameworkError::EntityError`].

/// Errors that can occur while talking to a storage actor.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Storage actor closed")]
    ActorClosed,
    #[error("Storage actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True for a missing (or foreign-tenant) record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }

    /// Recovers a model error of type `E` carried in [`FrameworkError::EntityError`].
    /// Any other error (or a model error of another type) is returned unchanged.
    pub fn into_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
