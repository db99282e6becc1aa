//! [`ActorEntity`] implementation for [`Prompt`].
//!
//! Prompts depend on the Rule store: creation checks, through the injected
//! [`RuleClient`], that the target rule is visible to the caller.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::error::PromptError;
use crate::clients::RuleClient;
use crate::context::ExecutionContext;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Prompt, PromptCreate, PromptFilter, PromptId, PromptUpdate};

#[async_trait]
impl ActorEntity for Prompt {
    type Id = PromptId;
    type Create = PromptCreate;
    type Update = PromptUpdate;
    type Filter = PromptFilter;
    type Action = ();
    type ActionResult = ();
    type Context = RuleClient;
    type Error = PromptError;

    fn from_create_params(
        id: PromptId,
        params: PromptCreate,
        scope: &ExecutionContext,
    ) -> Result<Self, PromptError> {
        if params.name.trim().is_empty() {
            return Err(PromptError::ValidationError("name must not be empty".into()));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            tenant_id: scope.tenant_id.clone(),
            rule_id: params.rule_id,
            name: params.name,
            content: params.content,
            position: params.position,
            created_at: now,
            updated_at: now,
        })
    }

    fn visible_to(&self, scope: &ExecutionContext) -> bool {
        scope.owns(&self.tenant_id)
    }

    fn matches(&self, filter: &PromptFilter) -> bool {
        filter.rule_id.as_ref().is_none_or(|rule_id| &self.rule_id == rule_id)
            && filter
                .names
                .as_ref()
                .is_none_or(|names| names.iter().any(|name| name == &self.name))
    }

    async fn on_create(
        &mut self,
        scope: &ExecutionContext,
        rules: &RuleClient,
    ) -> Result<(), PromptError> {
        debug!(rule_id = %self.rule_id, "Validating rule");
        match rules.get(self.rule_id.clone(), scope).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PromptError::InvalidRule(self.rule_id.to_string())),
            Err(e) => Err(PromptError::StoreCommunicationError(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        update: PromptUpdate,
        _scope: &ExecutionContext,
        _rules: &RuleClient,
    ) -> Result<(), PromptError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(PromptError::ValidationError("name must not be empty".into()));
            }
            self.name = name;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _scope: &ExecutionContext,
        _rules: &RuleClient,
    ) -> Result<(), PromptError> {
        Err(PromptError::UnsupportedAction)
    }
}
