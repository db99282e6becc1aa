use std::sync::Arc;
use tracing::{error, info};

use crate::clients::{ExecutionClient, PromptClient, QueueClient, RuleClient, SessionClient};
use crate::framework::ActorClient;
use crate::registry::{RegistryError, ResourceRegistry};
use crate::router::ActionRouter;
use crate::storage::Storage;

/// Owns every storage actor and the action router built on top of them.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the Rule, Prompt, Queue,
///   Execution and Session actors
/// - **Dependency Wiring**: Prompt and Queue validate rules through a `RuleClient`;
///   Execution validates its rule and prompts through both clients
/// - **Routing**: registering each store under its registry key and building
///   the [`ActionRouter`]
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new()?;
/// let client = ServerActionClient::new(system.router(), context);
/// client.execute_action("rule.create", json!({ "name": "Eligibility" })).await?;
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub rule_client: RuleClient,
    pub prompt_client: PromptClient,
    pub queue_client: QueueClient,
    pub execution_client: ExecutionClient,
    pub session_client: SessionClient,
    router: Arc<ActionRouter>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Starts every actor and routes the built-in registry over them.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_registry(&ResourceRegistry::builtin()?)
    }

    /// Starts every actor and routes `registry` over them.
    ///
    /// Fails when a schema of `registry` names a database key with no store.
    pub fn with_registry(registry: &ResourceRegistry) -> Result<Self, RegistryError> {
        // 1. Create actors (no dependencies yet)
        let (rule_actor, rule_client) = crate::rule_actor::new();
        let (prompt_actor, prompt_client) = crate::prompt_actor::new();
        let (queue_actor, queue_client) = crate::queue_actor::new();
        let (execution_actor, execution_client) = crate::execution_actor::new();
        let (session_actor, session_client) = crate::session_actor::new();

        // 2. Routed stores, keyed like the registry
        let storage = Storage::new()
            .with_store("rules", rule_client.inner().clone())
            .with_store("prompts", prompt_client.inner().clone())
            .with_store("queues", queue_client.inner().clone())
            .with_store("executions", execution_client.inner().clone());
        let router = Arc::new(ActionRouter::new(registry, storage)?);

        // 3. Start actors with injected context
        let handles = vec![
            tokio::spawn(rule_actor.run(())),
            tokio::spawn(prompt_actor.run(rule_client.clone())),
            tokio::spawn(queue_actor.run(rule_client.clone())),
            tokio::spawn(execution_actor.run((rule_client.clone(), prompt_client.clone()))),
            tokio::spawn(session_actor.run(())),
        ];
        info!(actors = handles.len(), "Store system started");

        Ok(Self {
            rule_client,
            prompt_client,
            queue_client,
            execution_client,
            session_client,
            router,
            handles,
        })
    }

    /// The router over this system's stores. Every clone keeps the stores open.
    pub fn router(&self) -> Arc<ActionRouter> {
        Arc::clone(&self.router)
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the actor channels. The Prompt actor stops
    /// once the Execution actor has released its `PromptClient`; the Rule actor
    /// stops last, after every dependent has released its `RuleClient`.
    /// Every router clone handed out by [`router`](Self::router) must be
    /// dropped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.router);
        drop(self.rule_client);
        drop(self.prompt_client);
        drop(self.queue_client);
        drop(self.execution_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
