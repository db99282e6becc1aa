use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_id!(
    /// Identifier of a [`Rule`], e.g. `rule_3`.
    RuleId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Draft,
    Published,
    Archived,
}

/// A business rule authored in the editor.
///
/// # Storage
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`rule_actor`](crate::rule_actor); see there for validation and the
/// `publish` / `archive` actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: RuleId,
    pub tenant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: RuleStatus,
    /// The rule as written in the business-rule editor.
    pub source_code: String,
    /// Generated (or hand-edited) Python executed for the rule.
    pub python_code: Option<String>,
    /// Bumped on every successful write.
    pub version: u32,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `rule.create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_code: String,
    #[serde(default)]
    pub python_code: Option<String>,
}

/// Payload for `rule.update`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RuleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_code: Option<String>,
}

/// Criteria for `rule.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<RuleStatus>,
}
