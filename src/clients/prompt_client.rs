use crate::context::ExecutionContext;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Prompt, PromptCreate, PromptFilter, PromptId, PromptUpdate, RuleId};
use crate::prompt_actor::PromptError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Prompt store.
#[derive(Clone)]
pub struct PromptClient {
    inner: ResourceClient<Prompt>,
}

impl PromptClient {
    pub fn new(inner: ResourceClient<Prompt>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Prompt> for PromptClient {
    type Error = PromptError;

    fn inner(&self) -> &ResourceClient<Prompt> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> PromptError {
        match e.into_entity::<PromptError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => PromptError::NotFound(id),
            Err(other) => PromptError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl PromptClient {
    #[instrument(skip(self, prompt, scope), fields(tenant = %scope.tenant_id))]
    pub async fn create_prompt(
        &self,
        prompt: PromptCreate,
        scope: &ExecutionContext,
    ) -> Result<Prompt, PromptError> {
        debug!(?prompt, "Sending request");
        self.inner.create(prompt, scope).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update, scope), fields(tenant = %scope.tenant_id))]
    pub async fn update_prompt(
        &self,
        id: PromptId,
        update: PromptUpdate,
        scope: &ExecutionContext,
    ) -> Result<Prompt, PromptError> {
        debug!(?update, "Sending request");
        self.inner
            .update(id, update, scope)
            .await
            .map_err(Self::map_error)
    }

    /// Prompts of `rule_id` whose name is one of `names`, in store order.
    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn find_by_names(
        &self,
        rule_id: &RuleId,
        names: &[String],
        scope: &ExecutionContext,
    ) -> Result<Vec<Prompt>, PromptError> {
        let filter = PromptFilter {
            rule_id: Some(rule_id.clone()),
            names: Some(names.to_vec()),
        };
        self.list(filter, scope).await
    }
}
