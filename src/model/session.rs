use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

string_id!(
    /// Opaque session token carried in the session cookie.
    SessionToken
);

/// A signed-in browser session. Issued by the auth provider, read by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: SessionToken,
    pub user_id: String,
    pub tenant_id: String,
    pub branch_id: Option<String>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Usable for authentication at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && now < self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub user_id: String,
    pub tenant_id: String,
    pub branch_id: Option<String>,
    pub ttl: Duration,
}
