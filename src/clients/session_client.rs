use crate::context::ExecutionContext;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Session, SessionCreate, SessionToken};
use crate::session_actor::{system_scope, SessionAction, SessionError};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

/// Client for interacting with the Session store.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> SessionError {
        match e.into_entity::<SessionError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(_)) => SessionError::Unknown,
            Err(other) => SessionError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl SessionClient {
    /// Issues a new session and returns it with its token.
    #[instrument(skip(self, session), fields(user = %session.user_id, tenant = %session.tenant_id))]
    pub async fn create_session(&self, session: SessionCreate) -> Result<Session, SessionError> {
        debug!("Sending request");
        self.inner
            .create(session, &system_scope())
            .await
            .map_err(Self::map_error)
    }

    /// Turns a session token into the caller's [`ExecutionContext`].
    ///
    /// Unknown, revoked and expired tokens are all rejected.
    #[instrument(skip_all)]
    pub async fn resolve(&self, token: &str) -> Result<ExecutionContext, SessionError> {
        let session = self
            .get(SessionToken::from(token), &system_scope())
            .await?
            .ok_or(SessionError::Unknown)?;
        if session.revoked {
            return Err(SessionError::Revoked);
        }
        if !session.is_active(Utc::now()) {
            return Err(SessionError::Expired);
        }
        let mut context = ExecutionContext::new(session.user_id, session.tenant_id)
            .with_session(session.token.to_string());
        context.branch_id = session.branch_id;
        Ok(context)
    }

    #[instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> Result<Session, SessionError> {
        self.inner
            .perform_action(SessionToken::from(token), SessionAction::Revoke, &system_scope())
            .await
            .map_err(Self::map_error)
    }
}
