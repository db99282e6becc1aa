//! Application state shared across handlers.

use std::sync::Arc;

use crate::clients::{ServerActionClient, SessionClient};
use crate::context::ExecutionContext;
use crate::router::ActionRouter;
use crate::server::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub router: Arc<ActionRouter>,
    pub sessions: SessionClient,
}

impl AppState {
    pub fn new(config: AppConfig, router: Arc<ActionRouter>, sessions: SessionClient) -> Self {
        Self {
            config: Arc::new(config),
            router,
            sessions,
        }
    }

    /// An action client acting as `context`.
    pub fn actions(&self, context: ExecutionContext) -> ServerActionClient {
        ServerActionClient::new(Arc::clone(&self.router), context)
    }
}
