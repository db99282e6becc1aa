//! # Server Action Client
//!
//! Entry point for server code that wants to run actions without holding the
//! router itself. A client binds a router to one [`ExecutionContext`].
//!
//! The server passes its router explicitly with [`ServerActionClient::new`].
//! [`install_router`] keeps one process-wide router for callers that cannot be
//! handed one; installing twice keeps the first.

use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::{debug, instrument};

use crate::context::ExecutionContext;
use crate::router::{ActionCall, ActionRouter, RouterError};

static ROUTER: OnceLock<Arc<ActionRouter>> = OnceLock::new();

/// Installs the process-wide router and returns the installed one.
///
/// A second call does not replace the first router; it returns it.
pub fn install_router(router: Arc<ActionRouter>) -> Arc<ActionRouter> {
    ROUTER.get_or_init(|| router).clone()
}

/// The process-wide router, if one was installed.
pub fn installed_router() -> Option<Arc<ActionRouter>> {
    ROUTER.get().cloned()
}

/// Runs actions on a router on behalf of one caller.
#[derive(Clone)]
pub struct ServerActionClient {
    router: Arc<ActionRouter>,
    context: ExecutionContext,
}

impl ServerActionClient {
    pub fn new(router: Arc<ActionRouter>, context: ExecutionContext) -> Self {
        Self { router, context }
    }

    /// Binds `context` to the process-wide router.
    pub fn create(context: ExecutionContext) -> Result<Self, RouterError> {
        let router = installed_router().ok_or(RouterError::RouterNotInstalled)?;
        Ok(Self::new(router, context))
    }

    /// Like [`create`](Self::create), reduced to a single `execute(action, data)`.
    pub fn create_simple(context: ExecutionContext) -> Result<SimpleActionClient, RouterError> {
        Self::create(context).map(|client| SimpleActionClient { client })
    }

    /// One-shot: bind `context` to the process-wide router and run one action.
    pub async fn dispatch(
        action: &str,
        data: Value,
        context: ExecutionContext,
    ) -> Result<Value, RouterError> {
        Self::create(context)?.execute_action(action, data).await
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    #[instrument(skip(self, data), fields(tenant = %self.context.tenant_id))]
    pub async fn execute_action(&self, action: &str, data: Value) -> Result<Value, RouterError> {
        self.execute(ActionCall::new(action, data)).await
    }

    /// Runs a full call, options included.
    pub async fn execute(&self, call: ActionCall) -> Result<Value, RouterError> {
        debug!(action = %call.action, "Dispatching");
        self.router.execute_action(call, &self.context).await
    }
}

/// A bound client with nothing but `execute`.
#[derive(Clone)]
pub struct SimpleActionClient {
    client: ServerActionClient,
}

impl SimpleActionClient {
    pub async fn execute(&self, action: &str, data: Value) -> Result<Value, RouterError> {
        self.client.execute_action(action, data).await
    }
}
