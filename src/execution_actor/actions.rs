//! Custom actions for the Execution store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status transitions of an execution, routed as `execution.start`,
/// `execution.complete` and `execution.fail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", deny_unknown_fields)]
pub enum ExecutionAction {
    /// Pending → Running, while the link is still valid.
    Start,
    /// Running → Completed.
    Complete {
        #[serde(default)]
        output: Value,
    },
    /// Pending or Running → Failed.
    Fail { error: String },
}
