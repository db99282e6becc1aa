//! Queue storage: ordered lists of rules with pause/resume.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::QueueClient;
use crate::framework::ResourceActor;
use crate::model::{Queue, QueueId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Queue actor and its client.
///
/// The actor must be run with a [`RuleClient`](crate::clients::RuleClient) as context.
pub fn new() -> (ResourceActor<Queue>, QueueClient) {
    let queue_id_counter = Arc::new(AtomicU64::new(1));
    let next_queue_id = move || {
        let id = queue_id_counter.fetch_add(1, Ordering::SeqCst);
        QueueId::from(format!("queue_{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(32, next_queue_id);
    (actor, QueueClient::new(generic_client))
}
