use crate::context::ExecutionContext;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Rule, RuleCreate, RuleFilter, RuleId, RuleUpdate};
use crate::rule_actor::{RuleAction, RuleError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Rule store.
#[derive(Clone)]
pub struct RuleClient {
    inner: ResourceClient<Rule>,
}

impl RuleClient {
    pub fn new(inner: ResourceClient<Rule>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Rule> for RuleClient {
    type Error = RuleError;

    fn inner(&self) -> &ResourceClient<Rule> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> RuleError {
        match e.into_entity::<RuleError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => RuleError::NotFound(id),
            Err(other) => RuleError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl RuleClient {
    #[instrument(skip(self, rule, scope), fields(tenant = %scope.tenant_id))]
    pub async fn create_rule(
        &self,
        rule: RuleCreate,
        scope: &ExecutionContext,
    ) -> Result<Rule, RuleError> {
        debug!(?rule, "Sending request");
        self.inner.create(rule, scope).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update, scope), fields(tenant = %scope.tenant_id))]
    pub async fn update_rule(
        &self,
        id: RuleId,
        update: RuleUpdate,
        scope: &ExecutionContext,
    ) -> Result<Rule, RuleError> {
        debug!(?update, "Sending request");
        self.inner
            .update(id, update, scope)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn publish(&self, id: RuleId, scope: &ExecutionContext) -> Result<Rule, RuleError> {
        self.inner
            .perform_action(id, RuleAction::Publish, scope)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn archive(&self, id: RuleId, scope: &ExecutionContext) -> Result<Rule, RuleError> {
        self.inner
            .perform_action(id, RuleAction::Archive, scope)
            .await
            .map_err(Self::map_error)
    }

    /// First rule of the caller's tenant with exactly this name.
    #[instrument(skip(self, scope), fields(tenant = %scope.tenant_id))]
    pub async fn find_by_name(
        &self,
        name: &str,
        scope: &ExecutionContext,
    ) -> Result<Option<Rule>, RuleError> {
        let filter = RuleFilter {
            name: Some(name.to_string()),
            status: None,
        };
        let rules = self.list(filter, scope).await?;
        Ok(rules.into_iter().next())
    }
}
