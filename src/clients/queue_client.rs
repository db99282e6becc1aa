use crate::context::ExecutionContext;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Queue, QueueCreate, QueueId, RuleId};
use crate::queue_actor::{QueueAction, QueueError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Queue store.
#[derive(Clone)]
pub struct QueueClient {
    inner: ResourceClient<Queue>,
}

impl QueueClient {
    pub fn new(inner: ResourceClient<Queue>) -> Self {
        Self { inner }
    }

    async fn act(
        &self,
        id: QueueId,
        action: QueueAction,
        scope: &ExecutionContext,
    ) -> Result<Queue, QueueError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action, scope)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Queue> for QueueClient {
    type Error = QueueError;

    fn inner(&self) -> &ResourceClient<Queue> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> QueueError {
        match e.into_entity::<QueueError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => QueueError::NotFound(id),
            Err(other) => QueueError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl QueueClient {
    #[instrument(skip(self, queue, scope), fields(tenant = %scope.tenant_id))]
    pub async fn create_queue(
        &self,
        queue: QueueCreate,
        scope: &ExecutionContext,
    ) -> Result<Queue, QueueError> {
        debug!(?queue, "Sending request");
        self.inner.create(queue, scope).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn add_rule(
        &self,
        id: QueueId,
        rule_id: RuleId,
        scope: &ExecutionContext,
    ) -> Result<Queue, QueueError> {
        self.act(id, QueueAction::AddRule { rule_id }, scope).await
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn remove_rule(
        &self,
        id: QueueId,
        rule_id: RuleId,
        scope: &ExecutionContext,
    ) -> Result<Queue, QueueError> {
        self.act(id, QueueAction::RemoveRule { rule_id }, scope).await
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn pause(&self, id: QueueId, scope: &ExecutionContext) -> Result<Queue, QueueError> {
        self.act(id, QueueAction::Pause, scope).await
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn resume(&self, id: QueueId, scope: &ExecutionContext) -> Result<Queue, QueueError> {
        self.act(id, QueueAction::Resume, scope).await
    }
}
