//! # Storage Client
//!
//! The cloneable sending half of a storage pair.

use crate::context::ExecutionContext;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a `ResourceActor<T>`.
///
/// Holds only a channel sender, so clones are cheap and can be shared across
/// tasks. Every method clones the caller's [`ExecutionContext`] into the request.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(
        &self,
        params: T::Create,
        scope: &ExecutionContext,
    ) -> Result<T, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::Create {
            params,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn get(
        &self,
        id: T::Id,
        scope: &ExecutionContext,
    ) -> Result<Option<T>, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::Get {
            id,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn list(
        &self,
        filter: T::Filter,
        scope: &ExecutionContext,
    ) -> Result<Vec<T>, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::List {
            filter,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn update(
        &self,
        id: T::Id,
        update: T::Update,
        scope: &ExecutionContext,
    ) -> Result<T, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id, scope: &ExecutionContext) -> Result<T, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::Delete {
            id,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
        scope: &ExecutionContext,
    ) -> Result<T::ActionResult, FrameworkError> {
        let scope = scope.clone();
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            scope,
            respond_to,
        })
        .await
    }
}
