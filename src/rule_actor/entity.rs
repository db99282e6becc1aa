//! [`ActorEntity`] implementation for [`Rule`].

use async_trait::async_trait;
use chrono::Utc;

use super::actions::RuleAction;
use super::error::RuleError;
use crate::context::ExecutionContext;
use crate::framework::ActorEntity;
use crate::model::{Rule, RuleCreate, RuleFilter, RuleId, RuleStatus, RuleUpdate};

fn validate_name(name: &str) -> Result<(), RuleError> {
    if name.trim().is_empty() {
        return Err(RuleError::ValidationError("name must not be empty".into()));
    }
    Ok(())
}

impl Rule {
    fn touch(&mut self, scope: &ExecutionContext) {
        self.version += 1;
        self.updated_by = scope.user_id.clone();
        self.updated_at = Utc::now();
    }

    /// Moves the rule along draft -> published -> archived. Archived is final;
    /// publishing needs source code.
    fn transition(&mut self, to: RuleStatus) -> Result<(), RuleError> {
        match (self.status, to) {
            (RuleStatus::Draft, RuleStatus::Published) => {
                if self.source_code.trim().is_empty() {
                    return Err(RuleError::ValidationError(
                        "cannot publish a rule without source code".into(),
                    ));
                }
            }
            (_, RuleStatus::Archived) => {}
            (from, to) => return Err(RuleError::InvalidTransition { from, to }),
        }
        self.status = to;
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Rule {
    type Id = RuleId;
    type Create = RuleCreate;
    type Update = RuleUpdate;
    type Filter = RuleFilter;
    type Action = RuleAction;
    type ActionResult = Rule;
    type Context = ();
    type Error = RuleError;

    /// New rules start as drafts at version 1, owned by the caller's tenant.
    fn from_create_params(
        id: RuleId,
        params: RuleCreate,
        scope: &ExecutionContext,
    ) -> Result<Self, RuleError> {
        validate_name(&params.name)?;
        let now = Utc::now();
        Ok(Self {
            id,
            tenant_id: scope.tenant_id.clone(),
            name: params.name,
            description: params.description,
            status: RuleStatus::Draft,
            source_code: params.source_code,
            python_code: params.python_code,
            version: 1,
            created_by: scope.user_id.clone(),
            updated_by: scope.user_id.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    fn visible_to(&self, scope: &ExecutionContext) -> bool {
        scope.owns(&self.tenant_id)
    }

    fn matches(&self, filter: &RuleFilter) -> bool {
        filter.name.as_ref().is_none_or(|name| &self.name == name)
            && filter.status.is_none_or(|status| self.status == status)
    }

    async fn on_update(
        &mut self,
        update: RuleUpdate,
        scope: &ExecutionContext,
        _ctx: &(),
    ) -> Result<(), RuleError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(source_code) = update.source_code {
            self.source_code = source_code;
        }
        if let Some(python_code) = update.python_code {
            self.python_code = Some(python_code);
        }
        // Editors resend the current status with every save.
        if let Some(status) = update.status.filter(|status| *status != self.status) {
            self.transition(status)?;
        }
        self.touch(scope);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RuleAction,
        scope: &ExecutionContext,
        _ctx: &(),
    ) -> Result<Rule, RuleError> {
        match action {
            RuleAction::Publish => self.transition(RuleStatus::Published)?,
            RuleAction::Archive => self.transition(RuleStatus::Archived)?,
        }
        self.touch(scope);
        Ok(self.clone())
    }
}
