//! API route handlers.

pub mod actions;
pub mod health;
pub mod prompt;

pub use actions::execute_action;
pub use health::{health, health_routes};
pub use prompt::execute_prompt;
