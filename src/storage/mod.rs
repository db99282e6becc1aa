//! # Storage
//!
//! The router reaches every model through one object-safe trait,
//! [`ModelStore`]: JSON in, JSON out. Each store decodes the payload into a
//! typed [`ActionRequest`] for its model before anything reaches the actor.
//!
//! [`Storage`] is the set of stores keyed by the `database_key` of the
//! resource registry.

mod request;

pub use request::ActionRequest;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::framework::{ActorEntity, ResourceClient};
use crate::registry::Operation;
use crate::router::RouterError;

/// A model's records, reachable with untyped payloads.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Decodes `data` for `operation`, runs it, and returns the JSON result.
    ///
    /// Fails with [`RouterError::InvalidPayload`] before touching storage when
    /// `data` does not decode.
    async fn execute(
        &self,
        operation: &Operation,
        data: Value,
        scope: &ExecutionContext,
    ) -> Result<Value, RouterError>;
}

fn to_json(value: impl Serialize) -> Result<Value, RouterError> {
    serde_json::to_value(value).map_err(|e| RouterError::Serialization(e.to_string()))
}

#[async_trait]
impl<T> ModelStore for ResourceClient<T>
where
    T: ActorEntity + Serialize,
    T::Id: DeserializeOwned,
    T::Create: DeserializeOwned,
    T::Update: DeserializeOwned,
    T::Filter: DeserializeOwned,
    T::Action: DeserializeOwned + Serialize,
    T::ActionResult: Serialize,
{
    async fn execute(
        &self,
        operation: &Operation,
        data: Value,
        scope: &ExecutionContext,
    ) -> Result<Value, RouterError> {
        let request = ActionRequest::<T>::decode(operation, data).map_err(|reason| {
            RouterError::InvalidPayload {
                operation: operation.to_string(),
                reason,
            }
        })?;

        match request {
            ActionRequest::Create(params) => to_json(self.create(params, scope).await?),
            ActionRequest::Get(id) => to_json(self.get(id, scope).await?),
            ActionRequest::List(filter) => to_json(self.list(filter, scope).await?),
            ActionRequest::Update(id, update) => to_json(self.update(id, update, scope).await?),
            ActionRequest::Delete(id) => to_json(self.delete(id, scope).await?),
            ActionRequest::Custom(id, action) => {
                to_json(self.perform_action(id, action, scope).await?)
            }
        }
    }
}

/// Stores keyed by database key.
#[derive(Clone, Default)]
pub struct Storage {
    stores: HashMap<String, Arc<dyn ModelStore>>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `store` under `database_key`, replacing any previous store.
    pub fn with_store(
        mut self,
        database_key: impl Into<String>,
        store: impl ModelStore + 'static,
    ) -> Self {
        self.stores.insert(database_key.into(), Arc::new(store));
        self
    }

    pub fn get(&self, database_key: &str) -> Option<&Arc<dyn ModelStore>> {
        self.stores.get(database_key)
    }

    pub fn contains(&self, database_key: &str) -> bool {
        self.stores.contains_key(database_key)
    }
}
