//! Custom actions for the Queue store.

use serde::{Deserialize, Serialize};

use crate::model::RuleId;

/// Routed as `queue.addRule`, `queue.removeRule`, `queue.pause`, `queue.resume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", deny_unknown_fields)]
pub enum QueueAction {
    /// Append a rule; it must be visible to the caller.
    AddRule {
        #[serde(rename = "ruleId")]
        rule_id: RuleId,
    },
    RemoveRule {
        #[serde(rename = "ruleId")]
        rule_id: RuleId,
    },
    Pause,
    Resume,
}
