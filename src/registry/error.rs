use thiserror::Error;

/// Configuration errors in the resource registry. Raised at startup, never per request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate action prefix: {0}")]
    DuplicatePrefix(String),

    #[error("Duplicate action {action} in resource {prefix}")]
    DuplicateAction { prefix: String, action: String },

    #[error("Resource {0} declares no actions")]
    NoActions(String),

    /// Prefixes and actions must be non-empty and contain no `.`.
    #[error("Invalid name {0:?}")]
    InvalidName(String),

    /// A schema points at a database key with no registered store.
    #[error("No store registered for database key {database_key} (resource {prefix})")]
    MissingStore {
        prefix: String,
        database_key: String,
    },
}
