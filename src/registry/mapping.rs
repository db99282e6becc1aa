//! # Action Mapping
//!
//! Flattens the registry into a lookup table from full action name
//! (`rule.update`) to the handler descriptor the router dispatches on.

use std::collections::BTreeMap;
use std::fmt;

use super::{RegistryError, ResourceSchema};

/// The storage operation an action suffix maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Get,
    List,
    Update,
    Delete,
    /// A model-specific action, e.g. `publish`.
    Custom(String),
}

impl Operation {
    /// Suffixes outside the CRUD set are model-specific actions.
    pub fn parse(suffix: &str) -> Self {
        match suffix {
            "create" => Operation::Create,
            "get" => Operation::Get,
            "list" => Operation::List,
            "update" => Operation::Update,
            "delete" => Operation::Delete,
            other => Operation::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::List => "list",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Custom(name) => name,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the router needs to dispatch one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionHandler {
    /// Full action name, `<prefix>.<suffix>`.
    pub action: String,
    pub action_prefix: &'static str,
    pub database_key: &'static str,
    pub model_name: &'static str,
    pub operation: Operation,
}

/// Full action name → handler. Read-only once built.
pub type ActionMappings = BTreeMap<String, ActionHandler>;

/// Builds the mapping, rejecting any registry that would make an action name ambiguous.
pub fn build_action_mappings(schemas: &[ResourceSchema]) -> Result<ActionMappings, RegistryError> {
    let mut mappings = ActionMappings::new();
    let mut prefixes = Vec::with_capacity(schemas.len());

    for schema in schemas {
        validate_name(schema.action_prefix)?;
        if prefixes.contains(&schema.action_prefix) {
            return Err(RegistryError::DuplicatePrefix(schema.action_prefix.to_string()));
        }
        prefixes.push(schema.action_prefix);

        if schema.actions.is_empty() {
            return Err(RegistryError::NoActions(schema.action_prefix.to_string()));
        }
        for suffix in schema.actions {
            validate_name(suffix)?;
            let action = format!("{}.{}", schema.action_prefix, suffix);
            if mappings.contains_key(&action) {
                return Err(RegistryError::DuplicateAction {
                    prefix: schema.action_prefix.to_string(),
                    action: suffix.to_string(),
                });
            }
            let handler = ActionHandler {
                action: action.clone(),
                action_prefix: schema.action_prefix,
                database_key: schema.database_key,
                model_name: schema.model_name,
                operation: Operation::parse(suffix),
            };
            mappings.insert(action, handler);
        }
    }

    Ok(mappings)
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() || name.contains('.') || name.chars().any(char::is_whitespace) {
        return Err(RegistryError::InvalidName(name.to_string()));
    }
    Ok(())
}
