//! [`ActorEntity`] implementation for [`Queue`].

use async_trait::async_trait;
use chrono::Utc;

use super::actions::QueueAction;
use super::error::QueueError;
use crate::clients::RuleClient;
use crate::context::ExecutionContext;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Queue, QueueCreate, QueueFilter, QueueId, QueueUpdate};

#[async_trait]
impl ActorEntity for Queue {
    type Id = QueueId;
    type Create = QueueCreate;
    type Update = QueueUpdate;
    type Filter = QueueFilter;
    type Action = QueueAction;
    type ActionResult = Queue;
    type Context = RuleClient;
    type Error = QueueError;

    /// Queues start empty and running.
    fn from_create_params(
        id: QueueId,
        params: QueueCreate,
        scope: &ExecutionContext,
    ) -> Result<Self, QueueError> {
        if params.name.trim().is_empty() {
            return Err(QueueError::ValidationError("name must not be empty".into()));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            tenant_id: scope.tenant_id.clone(),
            name: params.name,
            description: params.description,
            rule_ids: Vec::new(),
            paused: false,
            created_at: now,
            updated_at: now,
        })
    }

    fn visible_to(&self, scope: &ExecutionContext) -> bool {
        scope.owns(&self.tenant_id)
    }

    fn matches(&self, filter: &QueueFilter) -> bool {
        filter.name.as_ref().is_none_or(|name| &self.name == name)
            && filter.paused.is_none_or(|paused| self.paused == paused)
    }

    async fn on_update(
        &mut self,
        update: QueueUpdate,
        _scope: &ExecutionContext,
        _rules: &RuleClient,
    ) -> Result<(), QueueError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(QueueError::ValidationError("name must not be empty".into()));
            }
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: QueueAction,
        scope: &ExecutionContext,
        rules: &RuleClient,
    ) -> Result<Queue, QueueError> {
        match action {
            QueueAction::AddRule { rule_id } => {
                if self.rule_ids.contains(&rule_id) {
                    return Err(QueueError::AlreadyQueued(rule_id.to_string()));
                }
                match rules.get(rule_id.clone(), scope).await {
                    Ok(Some(_)) => self.rule_ids.push(rule_id),
                    Ok(None) => return Err(QueueError::InvalidRule(rule_id.to_string())),
                    Err(e) => return Err(QueueError::StoreCommunicationError(e.to_string())),
                }
            }
            QueueAction::RemoveRule { rule_id } => {
                let before = self.rule_ids.len();
                self.rule_ids.retain(|queued| queued != &rule_id);
                if self.rule_ids.len() == before {
                    return Err(QueueError::NotQueued(rule_id.to_string()));
                }
            }
            QueueAction::Pause => self.paused = true,
            QueueAction::Resume => self.paused = false,
        }
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}
