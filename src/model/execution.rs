use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PromptId, RuleId};

string_id!(
    /// Identifier of an [`Execution`]; a v4 UUID so it can appear in links.
    ExecutionId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl ExecutionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExecutionStatus::Completed | ExecutionStatus::Failed)
    }
}

/// One run of a rule against a set of its prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: ExecutionId,
    pub tenant_id: String,
    pub rule_id: RuleId,
    pub prompt_ids: Vec<PromptId>,
    pub session_id: Option<String>,
    pub status: ExecutionStatus,
    pub requested_by: String,
    pub output: Option<serde_json::Value>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Payload for `execution.create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExecutionCreate {
    pub rule_id: RuleId,
    pub prompt_ids: Vec<PromptId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Lifetime of the execution link; defaults to 24 hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExecutionFilter {
    #[serde(default)]
    pub rule_id: Option<RuleId>,
    #[serde(default)]
    pub status: Option<ExecutionStatus>,
}
