use crate::context::ExecutionContext;
use crate::execution_actor::{ExecutionAction, ExecutionError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Execution, ExecutionCreate, ExecutionId};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Execution store.
#[derive(Clone)]
pub struct ExecutionClient {
    inner: ResourceClient<Execution>,
}

impl ExecutionClient {
    pub fn new(inner: ResourceClient<Execution>) -> Self {
        Self { inner }
    }

    async fn act(
        &self,
        id: ExecutionId,
        action: ExecutionAction,
        scope: &ExecutionContext,
    ) -> Result<Execution, ExecutionError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action, scope)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Execution> for ExecutionClient {
    type Error = ExecutionError;

    fn inner(&self) -> &ResourceClient<Execution> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ExecutionError {
        match e.into_entity::<ExecutionError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => ExecutionError::NotFound(id),
            Err(other) => ExecutionError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl ExecutionClient {
    #[instrument(skip(self, execution, scope), fields(tenant = %scope.tenant_id))]
    pub async fn create_execution(
        &self,
        execution: ExecutionCreate,
        scope: &ExecutionContext,
    ) -> Result<Execution, ExecutionError> {
        debug!(?execution, "Sending request");
        self.inner
            .create(execution, scope)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn start(
        &self,
        id: ExecutionId,
        scope: &ExecutionContext,
    ) -> Result<Execution, ExecutionError> {
        self.act(id, ExecutionAction::Start, scope).await
    }

    #[instrument(skip(self, output, scope), fields(tenant = %scope.tenant_id))]
    pub async fn complete(
        &self,
        id: ExecutionId,
        output: Value,
        scope: &ExecutionContext,
    ) -> Result<Execution, ExecutionError> {
        self.act(id, ExecutionAction::Complete { output }, scope).await
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn fail(
        &self,
        id: ExecutionId,
        error: String,
        scope: &ExecutionContext,
    ) -> Result<Execution, ExecutionError> {
        self.act(id, ExecutionAction::Fail { error }, scope).await
    }
}
