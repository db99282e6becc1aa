//! # ActorEntity Trait
//!
//! The contract every persisted model (Rule, Prompt, Queue, Execution, Session)
//! implements to be owned by a generic [`ResourceActor`](super::ResourceActor).
//!
//! Associated types pin each operation to its own DTO: a `Rule` store only
//! accepts `RuleCreate` for creation, `RuleUpdate` for updates and `RuleAction`
//! for custom actions, so a payload meant for one model can never reach another.
//!
//! # Tenancy
//! Every hook receives the caller's [`ExecutionContext`]. The actor consults
//! [`ActorEntity::visible_to`] before handing out or mutating a record, so a record
//! owned by another tenant behaves exactly like a missing one.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::visible_to`] defaults to "visible to everyone".
//! - [`ActorEntity::matches`] defaults to "matches every filter".
//! - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::context::ExecutionContext;

/// Trait that any persisted model must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other stores (e.g. a prompt checking that
/// its rule exists). `Context` holds those dependencies and is injected when the
/// actor is started, not when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier of a record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a record.
    type Create: Send + Sync + Debug;

    /// Partial update; fields left out are not touched.
    type Update: Send + Sync + Debug;

    /// Criteria for `List` requests. `Default` lists everything visible.
    type Filter: Send + Sync + Debug + Default;

    /// Model-specific operations beyond CRUD (e.g. `Publish`).
    type Action: Send + Sync + Debug;

    /// Result of a model-specific operation.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()`. `()` when there are none.
    type Context: Send + Sync;

    /// Error produced by hooks. One enum per model covers every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from a freshly allocated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        scope: &ExecutionContext,
    ) -> Result<Self, Self::Error>;

    /// Whether the caller described by `scope` may see this record.
    fn visible_to(&self, _scope: &ExecutionContext) -> bool {
        true
    }

    /// Whether this record satisfies a `List` filter.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Runs after construction, before the record is stored. An error aborts the create.
    async fn on_create(
        &mut self,
        _scope: &ExecutionContext,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        scope: &ExecutionContext,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the record is removed. An error keeps the record.
    async fn on_delete(
        &self,
        _scope: &ExecutionContext,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a model-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        scope: &ExecutionContext,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
