//! Prompt storage. Prompts belong to a rule and are looked up by name when an
//! execution is requested.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PromptClient;
use crate::framework::ResourceActor;
use crate::model::{Prompt, PromptId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Prompt actor and its client.
///
/// The actor must be run with a [`RuleClient`](crate::clients::RuleClient) as context.
pub fn new() -> (ResourceActor<Prompt>, PromptClient) {
    let prompt_id_counter = Arc::new(AtomicU64::new(1));
    let next_prompt_id = move || {
        let id = prompt_id_counter.fetch_add(1, Ordering::SeqCst);
        PromptId::from(format!("prompt_{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(32, next_prompt_id);
    (actor, PromptClient::new(generic_client))
}
