//! # Storage Messages
//!
//! Requests sent from a [`ResourceClient`](super::ResourceClient) to its
//! [`ResourceActor`](super::ResourceActor).

use crate::context::ExecutionContext;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a storage actor.
///
/// The variants are the CRUD lifecycle plus `Action` for model-specific
/// operations. Each one carries the caller's [`ExecutionContext`] by value so
/// the actor can enforce tenancy without sharing any state with the caller.
///
/// `Create`, `Update` and `Delete` answer with the full record, the way an ORM
/// returns the row it wrote.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        scope: ExecutionContext,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        scope: ExecutionContext,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        scope: ExecutionContext,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        scope: ExecutionContext,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        scope: ExecutionContext,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        scope: ExecutionContext,
        respond_to: Response<T::ActionResult>,
    },
}
