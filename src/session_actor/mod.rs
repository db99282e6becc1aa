//! Session storage. Sessions are issued at sign-in and resolved from the
//! session cookie on every authenticated request.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SessionClient;
use crate::context::ExecutionContext;
use crate::framework::ResourceActor;
use crate::model::{Session, SessionToken};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Revoke,
}

/// Identity used for session bookkeeping, which happens before a caller is known.
pub fn system_scope() -> ExecutionContext {
    ExecutionContext::new("system", "system")
}

/// Creates a new Session actor and its client. Tokens are v4 UUIDs.
pub fn new() -> (ResourceActor<Session>, SessionClient) {
    let next_token = || SessionToken::from(uuid::Uuid::new_v4().to_string());
    let (actor, generic_client) = ResourceActor::new(32, next_token);
    (actor, SessionClient::new(generic_client))
}
