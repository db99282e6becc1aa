//! [`ActorEntity`] implementation for [`Session`].
//!
//! The token is the credential, so lookups are not tenant-scoped; the tenant
//! comes out of the session rather than going in.

use async_trait::async_trait;
use chrono::Utc;

use super::error::SessionError;
use super::SessionAction;
use crate::context::ExecutionContext;
use crate::framework::ActorEntity;
use crate::model::{Session, SessionCreate, SessionToken};

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionToken;
    type Create = SessionCreate;
    type Update = ();
    type Filter = ();
    type Action = SessionAction;
    type ActionResult = Session;
    type Context = ();
    type Error = SessionError;

    fn from_create_params(
        token: SessionToken,
        params: SessionCreate,
        _scope: &ExecutionContext,
    ) -> Result<Self, SessionError> {
        if params.ttl <= chrono::Duration::zero() {
            return Err(SessionError::ValidationError("ttl must be positive".into()));
        }
        if params.user_id.is_empty() || params.tenant_id.is_empty() {
            return Err(SessionError::ValidationError(
                "user and tenant are required".into(),
            ));
        }
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(params.ttl)
            .ok_or_else(|| SessionError::ValidationError("ttl is out of range".into()))?;
        Ok(Self {
            token,
            user_id: params.user_id,
            tenant_id: params.tenant_id,
            branch_id: params.branch_id,
            revoked: false,
            created_at: now,
            expires_at,
        })
    }

    async fn on_update(
        &mut self,
        _update: (),
        _scope: &ExecutionContext,
        _ctx: &(),
    ) -> Result<(), SessionError> {
        Err(SessionError::Immutable)
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _scope: &ExecutionContext,
        _ctx: &(),
    ) -> Result<Session, SessionError> {
        match action {
            SessionAction::Revoke => self.revoked = true,
        }
        Ok(self.clone())
    }
}
