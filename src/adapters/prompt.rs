use serde_json::Value;

use super::{payload_with_id, TabIds, TabSaveAdapter};
use crate::model::PromptUpdate;

/// Editable state of a prompt tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptSnapshot {
    pub id: String,
    pub tab_id: String,
    pub name: Option<String>,
    pub content: Option<String>,
    pub position: Option<u32>,
}

/// Saves a prompt through `prompt.update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAdapter;

impl TabSaveAdapter for PromptAdapter {
    type Snapshot = PromptSnapshot;

    fn action_name(&self) -> &'static str {
        "prompt.update"
    }

    fn entity_key(&self, ids: &TabIds) -> String {
        format!("prompt:{}:{}", ids.entity_id, ids.tab_id)
    }

    fn has_changes(&self, prev: Option<&PromptSnapshot>, curr: &PromptSnapshot) -> bool {
        prev.is_none_or(|prev| {
            prev.name != curr.name || prev.content != curr.content || prev.position != curr.position
        })
    }

    fn build_payload(&self, id: &str, curr: &PromptSnapshot) -> Value {
        let update = PromptUpdate {
            name: curr.name.clone(),
            content: curr.content.clone(),
            position: curr.position,
        };
        payload_with_id(id, &update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_payload() {
        let curr = PromptSnapshot {
            id: "prompt_3".into(),
            tab_id: "tab-b".into(),
            content: Some("Is the applicant over 18?".into()),
            position: Some(0),
            ..Default::default()
        };
        assert!(PromptAdapter.has_changes(None, &curr));
        assert_eq!(
            PromptAdapter.build_payload("prompt_3", &curr),
            json!({"id": "prompt_3", "content": "Is the applicant over 18?", "position": 0})
        );
    }
}
