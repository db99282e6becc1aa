use serde_json::Value;

use super::{payload_with_id, TabIds, TabSaveAdapter};
use crate::model::{RuleStatus, RuleUpdate};

/// Editable state of the rule details tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleDetailsSnapshot {
    pub id: String,
    pub tab_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<RuleStatus>,
}

/// Saves name, description and status through `rule.update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleDetailsAdapter;

impl TabSaveAdapter for RuleDetailsAdapter {
    type Snapshot = RuleDetailsSnapshot;

    fn action_name(&self) -> &'static str {
        "rule.update"
    }

    fn entity_key(&self, ids: &TabIds) -> String {
        format!("rule-details:{}:{}", ids.entity_id, ids.tab_id)
    }

    fn has_changes(&self, prev: Option<&RuleDetailsSnapshot>, curr: &RuleDetailsSnapshot) -> bool {
        prev.is_none_or(|prev| {
            prev.name != curr.name
                || prev.description != curr.description
                || prev.status != curr.status
        })
    }

    fn build_payload(&self, id: &str, curr: &RuleDetailsSnapshot) -> Value {
        let update = RuleUpdate {
            name: curr.name.clone(),
            description: curr.description.clone(),
            status: curr.status,
            ..Default::default()
        };
        payload_with_id(id, &update)
    }
}

/// Editable state of the code editor tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PythonCodeSnapshot {
    pub id: String,
    pub tab_id: String,
    pub source_code: Option<String>,
    pub python_code: Option<String>,
}

/// Saves the rule source and its generated Python through `rule.update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonCodeAdapter;

impl TabSaveAdapter for PythonCodeAdapter {
    type Snapshot = PythonCodeSnapshot;

    fn action_name(&self) -> &'static str {
        "rule.update"
    }

    fn entity_key(&self, ids: &TabIds) -> String {
        format!("python-code:{}:{}", ids.entity_id, ids.tab_id)
    }

    fn has_changes(&self, prev: Option<&PythonCodeSnapshot>, curr: &PythonCodeSnapshot) -> bool {
        prev.is_none_or(|prev| {
            prev.source_code != curr.source_code || prev.python_code != curr.python_code
        })
    }

    fn build_payload(&self, id: &str, curr: &PythonCodeSnapshot) -> Value {
        let update = RuleUpdate {
            source_code: curr.source_code.clone(),
            python_code: curr.python_code.clone(),
            ..Default::default()
        };
        payload_with_id(id, &update)
    }
}
