//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient),
//! plus the untyped [`ServerActionClient`] that goes through the action router.

pub mod execution_client;
pub mod prompt_client;
pub mod queue_client;
pub mod rule_client;
pub mod server_action;
pub mod session_client;

pub use execution_client::*;
pub use prompt_client::*;
pub use queue_client::*;
pub use rule_client::*;
pub use server_action::*;
pub use session_client::*;
