//! # Resource Registry
//!
//! The static table of routable resources. Each [`ResourceSchema`] names an
//! action prefix, the storage key of the model behind it, and the action
//! suffixes it accepts; [`ResourceRegistry`] validates the table once and
//! derives the action mapping the router dispatches on.
//!
//! Registration happens at startup. There is no way to add a schema to a
//! registry a router already holds.

mod error;
pub mod mapping;

pub use error::RegistryError;
pub use mapping::{build_action_mappings, ActionHandler, ActionMappings, Operation};

/// Describes one routable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// First half of every action name, e.g. `rule`.
    pub action_prefix: &'static str,
    /// Key of the store holding the model's records.
    pub database_key: &'static str,
    pub model_name: &'static str,
    /// Accepted suffixes. CRUD names map to CRUD operations, anything else is
    /// a model-specific action.
    pub actions: &'static [&'static str],
}

/// The built-in resources.
pub static RESOURCE_REGISTRY: &[ResourceSchema] = &[
    ResourceSchema {
        action_prefix: "rule",
        database_key: "rules",
        model_name: "Rule",
        actions: &[
            "create", "get", "list", "update", "delete", "publish", "archive",
        ],
    },
    ResourceSchema {
        action_prefix: "prompt",
        database_key: "prompts",
        model_name: "Prompt",
        actions: &["create", "get", "list", "update", "delete"],
    },
    ResourceSchema {
        action_prefix: "queue",
        database_key: "queues",
        model_name: "Queue",
        actions: &[
            "create", "get", "list", "update", "delete", "addRule", "removeRule", "pause",
            "resume",
        ],
    },
    ResourceSchema {
        action_prefix: "execution",
        database_key: "executions",
        model_name: "Execution",
        actions: &["create", "get", "list", "delete", "start", "complete", "fail"],
    },
];

/// A validated set of schemas plus the action mapping derived from them.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    schemas: Vec<ResourceSchema>,
    mappings: ActionMappings,
}

impl ResourceRegistry {
    pub fn new(schemas: impl IntoIterator<Item = ResourceSchema>) -> Result<Self, RegistryError> {
        let schemas: Vec<ResourceSchema> = schemas.into_iter().collect();
        let mappings = build_action_mappings(&schemas)?;
        Ok(Self { schemas, mappings })
    }

    /// Registry over [`RESOURCE_REGISTRY`].
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(RESOURCE_REGISTRY.iter().copied())
    }

    /// Adds a schema and rebuilds the mapping.
    pub fn with_schema(mut self, schema: ResourceSchema) -> Result<Self, RegistryError> {
        self.schemas.push(schema);
        self.mappings = build_action_mappings(&self.schemas)?;
        Ok(self)
    }

    pub fn schemas(&self) -> &[ResourceSchema] {
        &self.schemas
    }

    pub fn get_action_mappings(&self) -> &ActionMappings {
        &self.mappings
    }

    pub fn resolve(&self, action: &str) -> Option<&ActionHandler> {
        self.mappings.get(action)
    }
}
