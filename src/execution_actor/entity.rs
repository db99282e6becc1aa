//! [`ActorEntity`] implementation for [`Execution`].
//!
//! Creation checks, through the injected Rule and Prompt clients, that the rule
//! and every prompt exist for the caller and that the prompts belong to the rule.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;

use super::actions::ExecutionAction;
use super::error::ExecutionError;
use super::DEFAULT_TTL_SECONDS;
use crate::clients::{PromptClient, RuleClient};
use crate::context::ExecutionContext;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{
    Execution, ExecutionCreate, ExecutionFilter, ExecutionId, ExecutionStatus, PromptFilter,
};

#[async_trait]
impl ActorEntity for Execution {
    type Id = ExecutionId;
    type Create = ExecutionCreate;
    type Update = ();
    type Filter = ExecutionFilter;
    type Action = ExecutionAction;
    type ActionResult = Execution;
    type Context = (RuleClient, PromptClient);
    type Error = ExecutionError;

    /// New executions are pending and expire `ttl_seconds` (default 24h) after creation.
    fn from_create_params(
        id: ExecutionId,
        params: ExecutionCreate,
        scope: &ExecutionContext,
    ) -> Result<Self, ExecutionError> {
        if params.prompt_ids.is_empty() {
            return Err(ExecutionError::ValidationError(
                "at least one prompt is required".into(),
            ));
        }
        let ttl = params.ttl_seconds.unwrap_or(DEFAULT_TTL_SECONDS);
        if ttl <= 0 {
            return Err(ExecutionError::ValidationError(format!(
                "ttlSeconds must be positive, got {ttl}"
            )));
        }
        let now = Utc::now();
        let expires_at = Duration::try_seconds(ttl)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                ExecutionError::ValidationError(format!("ttlSeconds is out of range, got {ttl}"))
            })?;
        Ok(Self {
            id,
            tenant_id: scope.tenant_id.clone(),
            rule_id: params.rule_id,
            prompt_ids: params.prompt_ids,
            session_id: params.session_id.or_else(|| scope.session_id.clone()),
            status: ExecutionStatus::Pending,
            requested_by: scope.user_id.clone(),
            output: None,
            error: None,
            created_at: now,
            expires_at,
        })
    }

    fn visible_to(&self, scope: &ExecutionContext) -> bool {
        scope.owns(&self.tenant_id)
    }

    fn matches(&self, filter: &ExecutionFilter) -> bool {
        filter.rule_id.as_ref().is_none_or(|rule_id| &self.rule_id == rule_id)
            && filter.status.is_none_or(|status| self.status == status)
    }

    async fn on_create(
        &mut self,
        scope: &ExecutionContext,
        ctx: &(RuleClient, PromptClient),
    ) -> Result<(), ExecutionError> {
        let (rules, prompts) = ctx;
        debug!(rule_id = %self.rule_id, prompts = self.prompt_ids.len(), "Validating rule and prompts");
        match rules.get(self.rule_id.clone(), scope).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ExecutionError::InvalidRule(self.rule_id.to_string())),
            Err(e) => return Err(ExecutionError::StoreCommunicationError(e.to_string())),
        }

        let filter = PromptFilter {
            rule_id: Some(self.rule_id.clone()),
            names: None,
        };
        let known = prompts
            .list(filter, scope)
            .await
            .map_err(|e| ExecutionError::StoreCommunicationError(e.to_string()))?;
        match self
            .prompt_ids
            .iter()
            .find(|id| !known.iter().any(|prompt| &prompt.id == *id))
        {
            Some(missing) => Err(ExecutionError::InvalidPrompt(missing.to_string())),
            None => Ok(()),
        }
    }

    async fn on_update(
        &mut self,
        _update: (),
        _scope: &ExecutionContext,
        _ctx: &(RuleClient, PromptClient),
    ) -> Result<(), ExecutionError> {
        Err(ExecutionError::Immutable)
    }

    async fn handle_action(
        &mut self,
        action: ExecutionAction,
        _scope: &ExecutionContext,
        _ctx: &(RuleClient, PromptClient),
    ) -> Result<Execution, ExecutionError> {
        match (action, self.status) {
            (ExecutionAction::Start, ExecutionStatus::Pending) => {
                if Utc::now() >= self.expires_at {
                    return Err(ExecutionError::Expired(self.id.to_string()));
                }
                self.status = ExecutionStatus::Running;
            }
            (ExecutionAction::Complete { output }, ExecutionStatus::Running) => {
                self.status = ExecutionStatus::Completed;
                self.output = Some(output);
            }
            (ExecutionAction::Fail { error }, status) if !status.is_terminal() => {
                self.status = ExecutionStatus::Failed;
                self.error = Some(error);
            }
            (action, status) => {
                let action = match action {
                    ExecutionAction::Start => "start",
                    ExecutionAction::Complete { .. } => "complete",
                    ExecutionAction::Fail { .. } => "fail",
                };
                return Err(ExecutionError::InvalidTransition { action, status });
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Prompt, Rule};
    use serde_json::json;

    /// Stores that transitions never consult.
    fn idle_stores() -> (RuleClient, PromptClient) {
        (
            RuleClient::new(MockClient::<Rule>::new().client()),
            PromptClient::new(MockClient::<Prompt>::new().client()),
        )
    }

    fn pending(ttl_seconds: Option<i64>) -> Result<Execution, ExecutionError> {
        Execution::from_create_params(
            ExecutionId::from("exec-1"),
            ExecutionCreate {
                rule_id: "rule_1".into(),
                prompt_ids: vec!["prompt_1".into()],
                session_id: None,
                ttl_seconds,
            },
            &ExecutionContext::new("user_1", "acme").with_session("sess-9"),
        )
    }

    #[test]
    fn test_default_ttl_is_one_day() {
        let execution = pending(None).unwrap();
        assert_eq!(execution.status, ExecutionStatus::Pending);
        assert_eq!(
            execution.expires_at - execution.created_at,
            Duration::hours(24)
        );
        assert_eq!(execution.session_id.as_deref(), Some("sess-9"));
    }

    #[test]
    fn test_rejects_non_positive_ttl() {
        assert!(matches!(
            pending(Some(0)),
            Err(ExecutionError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_ttl_past_the_calendar() {
        assert!(matches!(
            pending(Some(i64::MAX)),
            Err(ExecutionError::ValidationError(_))
        ));
        // Largest whole-second delta chrono accepts, still far past the last date.
        assert!(matches!(
            pending(Some(i64::MAX / 1000)),
            Err(ExecutionError::ValidationError(_))
        ));
        assert!(pending(Some(60)).is_ok());
    }

    #[tokio::test]
    async fn test_happy_path_transitions() {
        let scope = ExecutionContext::new("user_1", "acme");
        let stores = idle_stores();
        let mut execution = pending(None).unwrap();
        execution
            .handle_action(ExecutionAction::Start, &scope, &stores)
            .await
            .unwrap();
        let done = execution
            .handle_action(
                ExecutionAction::Complete {
                    output: json!({"approved": true}),
                },
                &scope,
                &stores,
            )
            .await
            .unwrap();
        assert_eq!(done.status, ExecutionStatus::Completed);
        assert_eq!(done.output, Some(json!({"approved": true})));
    }

    #[tokio::test]
    async fn test_terminal_executions_reject_actions() {
        let scope = ExecutionContext::new("user_1", "acme");
        let stores = idle_stores();
        let mut execution = pending(None).unwrap();
        execution
            .handle_action(
                ExecutionAction::Fail {
                    error: "boom".into(),
                },
                &scope,
                &stores,
            )
            .await
            .unwrap();
        let result = execution
            .handle_action(ExecutionAction::Start, &scope, &stores)
            .await;
        assert_eq!(
            result,
            Err(ExecutionError::InvalidTransition {
                action: "start",
                status: ExecutionStatus::Failed,
            })
        );
    }

    #[tokio::test]
    async fn test_expired_execution_cannot_start() {
        let scope = ExecutionContext::new("user_1", "acme");
        let stores = idle_stores();
        let mut execution = pending(None).unwrap();
        execution.expires_at = Utc::now() - Duration::seconds(1);
        let result = execution
            .handle_action(ExecutionAction::Start, &scope, &stores)
            .await;
        assert!(matches!(result, Err(ExecutionError::Expired(_))));
    }
}
