//! # Action Router
//!
//! Resolves `<prefix>.<suffix>` action names through the resource registry and
//! runs them against the matching store inside the caller's
//! [`ExecutionContext`].
//!
//! The router holds no per-request state and is shared behind an `Arc`.

mod error;

pub use error::RouterError;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::context::ExecutionContext;
use crate::registry::{ActionMappings, RegistryError, ResourceRegistry};
use crate::storage::Storage;

/// Options that shape the result, not the storage call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActionOptions {
    /// Top-level keys to keep in object results; `id` is always kept.
    #[serde(default)]
    pub select: Option<Vec<String>>,
}

/// One routed call: the action name, its payload and options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActionCall {
    pub action: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub options: ActionOptions,
}

impl ActionCall {
    pub fn new(action: impl Into<String>, data: Value) -> Self {
        Self {
            action: action.into(),
            data,
            options: ActionOptions::default(),
        }
    }

    pub fn with_select<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.select = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}

pub struct ActionRouter {
    mappings: ActionMappings,
    storage: Storage,
}

impl ActionRouter {
    /// Builds a router over `registry`. Every schema must have a store in `storage`.
    pub fn new(registry: &ResourceRegistry, storage: Storage) -> Result<Self, RegistryError> {
        for schema in registry.schemas() {
            if !storage.contains(schema.database_key) {
                return Err(RegistryError::MissingStore {
                    prefix: schema.action_prefix.to_string(),
                    database_key: schema.database_key.to_string(),
                });
            }
        }
        Ok(Self {
            mappings: registry.get_action_mappings().clone(),
            storage,
        })
    }

    pub fn mappings(&self) -> &ActionMappings {
        &self.mappings
    }

    /// Routes one call. Unknown actions and undecodable payloads fail without
    /// touching storage; storage errors come back as [`RouterError::Storage`].
    #[instrument(
        name = "action",
        skip_all,
        fields(action = %call.action, tenant = %context.tenant_id, user = %context.user_id)
    )]
    pub async fn execute_action(
        &self,
        call: ActionCall,
        context: &ExecutionContext,
    ) -> Result<Value, RouterError> {
        info!(data = %call.data, ?context, "Executing action");
        let started = Instant::now();

        let Some(handler) = self.mappings.get(&call.action) else {
            warn!("Action not found");
            return Err(RouterError::ActionNotFound(call.action));
        };
        let Some(store) = self.storage.get(handler.database_key) else {
            // Checked in `new`; only reachable if the two drift apart.
            warn!(database_key = handler.database_key, "No store");
            return Err(RouterError::ActionNotFound(call.action));
        };

        let result = store
            .execute(&handler.operation, call.data, context)
            .await
            .map(|value| match &call.options.select {
                Some(keys) => select(value, keys),
                None => value,
            });

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(model = handler.model_name, elapsed_ms, "Action completed"),
            Err(e) => warn!(model = handler.model_name, elapsed_ms, error = %e, "Action failed"),
        }
        result
    }
}

/// Projects objects (or each object of an array) onto `keys` plus `id`.
fn select(value: Value, keys: &[String]) -> Value {
    let project = |map: Map<String, Value>| {
        map.into_iter()
            .filter(|(key, _)| key == "id" || keys.iter().any(|k| k == key))
            .collect::<Map<String, Value>>()
    };
    match value {
        Value::Object(map) => Value::Object(project(map)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(project(map)),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}
