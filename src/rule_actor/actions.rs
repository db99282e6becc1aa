//! Custom actions for the Rule store.
//!
//! Routed as `rule.publish` and `rule.archive`; the payload is just `{ id }`.

use serde::{Deserialize, Serialize};

/// Status transitions that are not plain field updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", deny_unknown_fields)]
pub enum RuleAction {
    /// Draft → Published. Requires non-empty source code.
    Publish,
    /// Any status → Archived.
    Archive,
}
