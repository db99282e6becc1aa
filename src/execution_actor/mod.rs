//! Execution storage: pending runs of a rule against some of its prompts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ExecutionClient;
use crate::framework::ResourceActor;
use crate::model::{Execution, ExecutionId};

/// Lifetime of an execution link when the request does not set one.
pub const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Creates a new Execution actor and its client. Ids are v4 UUIDs.
///
/// The actor must be run with a `(RuleClient, PromptClient)` context.
pub fn new() -> (ResourceActor<Execution>, ExecutionClient) {
    let next_execution_id = || ExecutionId::from(uuid::Uuid::new_v4().to_string());
    let (actor, generic_client) = ResourceActor::new(32, next_execution_id);
    (actor, ExecutionClient::new(generic_client))
}
