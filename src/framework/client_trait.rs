//! # ActorClient Trait
//!
//! Shared surface for model-specific clients: `get`, `list` and `delete` come for
//! free once a wrapper exposes its inner [`ResourceClient`] and an error mapping.

use crate::context::ExecutionContext;
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for model-specific clients to inherit the standard read and delete calls.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The model-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map plumbing errors to the model error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    async fn get(&self, id: T::Id, scope: &ExecutionContext) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id, scope).await.map_err(Self::map_error)
    }

    /// List records matching `filter`.
    #[tracing::instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    async fn list(
        &self,
        filter: T::Filter,
        scope: &ExecutionContext,
    ) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter, scope).await.map_err(Self::map_error)
    }

    /// Delete a record by id, returning it.
    #[tracing::instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    async fn delete(&self, id: T::Id, scope: &ExecutionContext) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id, scope).await.map_err(Self::map_error)
    }
}
