//! Rule storage: validation, versioning and the `publish` / `archive` actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RuleClient;
use crate::framework::ResourceActor;
use crate::model::{Rule, RuleId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Rule actor and its client.
pub fn new() -> (ResourceActor<Rule>, RuleClient) {
    let rule_id_counter = Arc::new(AtomicU64::new(1));
    let next_rule_id = move || {
        let id = rule_id_counter.fetch_add(1, Ordering::SeqCst);
        RuleId::from(format!("rule_{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(32, next_rule_id);
    let client = RuleClient::new(generic_client);

    (actor, client)
}
