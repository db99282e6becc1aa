//! # Storage Actor
//!
//! `ResourceActor<T>` owns every record of one model and processes requests one
//! at a time in its own Tokio task. Exclusive ownership of the store inside the
//! task is what makes it safe to share the client across concurrent requests
//! without a lock around the records.

use crate::context::ExecutionContext;
use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a storage pair.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn `run` on the runtime; drop every client to stop it.
///
/// # Operations
///
/// * **Create**: allocates an id with the id generator, builds the record with
///   `from_create_params`, runs `on_create`, stores it, replies with the record.
/// * **Get**: replies with the record, or `None` when it is missing or not visible.
/// * **List**: replies with every visible record matching the filter, in
///   insertion order.
/// * **Update** / **Action**: look the record up (visible only), run the hook
///   on it in place, reply with the new state or the action result.
/// * **Delete**: runs `on_delete`, removes the record, replies with it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor and its client.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    /// `next_id_fn` allocates the id of every created record.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    fn visible_mut(&mut self, id: &T::Id, scope: &ExecutionContext) -> Option<&mut T> {
        self.store
            .get_mut(id)
            .filter(|item| item.visible_to(scope))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every hook; it is supplied here rather than in
    /// `new` so stores can depend on clients created after them.
    pub async fn run(mut self, context: T::Context) {
        let model = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(model, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create {
                    params,
                    scope,
                    respond_to,
                } => {
                    debug!(model, ?params, tenant = %scope.tenant_id, "Create");
                    let id = (self.next_id_fn)();

                    let mut item = match T::from_create_params(id.clone(), params, &scope) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(model, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&scope, &context).await {
                        warn!(model, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    self.order.push(id.clone());
                    info!(model, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get {
                    id,
                    scope,
                    respond_to,
                } => {
                    let item = self
                        .store
                        .get(&id)
                        .filter(|item| item.visible_to(&scope))
                        .cloned();
                    debug!(model, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    filter,
                    scope,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| item.visible_to(&scope) && item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(model, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    scope,
                    respond_to,
                } => {
                    debug!(model, %id, ?update, "Update");
                    let Some(item) = self.visible_mut(&id, &scope) else {
                        warn!(model, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks mutate in place; work on a copy so a failed hook leaves no partial write.
                    let mut draft = item.clone();
                    if let Err(e) = draft.on_update(update, &scope, &context).await {
                        warn!(model, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = draft.clone();
                    info!(model, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete {
                    id,
                    scope,
                    respond_to,
                } => {
                    debug!(model, %id, "Delete");
                    let Some(item) = self.visible_mut(&id, &scope) else {
                        warn!(model, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&scope, &context).await {
                        warn!(model, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(&id);
                    self.order.retain(|existing| existing != &id);
                    info!(model, %id, size = self.store.len(), "Deleted");
                    match removed {
                        Some(item) => {
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    scope,
                    respond_to,
                } => {
                    debug!(model, %id, ?action, "Action");
                    let Some(item) = self.visible_mut(&id, &scope) else {
                        warn!(model, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = item.clone();
                    let result = draft
                        .handle_action(action, &scope, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            *item = draft;
                            info!(model, %id, "Action ok");
                        }
                        Err(e) => warn!(model, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(model, size = self.store.len(), "Shutdown");
    }
}
