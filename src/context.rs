//! Per-request identity and tenancy.

use serde::{Deserialize, Serialize};

/// Identity and tenancy of the caller, threaded through every storage request.
///
/// Built once per request from the authenticated session (or the script-access
/// identity) and cloned into each message sent to a storage actor. It is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    pub user_id: String,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ExecutionContext {
    pub fn new(user_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            branch_id: None,
            session_id: None,
        }
    }

    pub fn with_branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// True when `tenant_id` is the tenant this context acts for.
    pub fn owns(&self, tenant_id: &str) -> bool {
        self.tenant_id == tenant_id
    }
}
