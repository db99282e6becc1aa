//! # Tab Save Adapters
//!
//! Each editor tab type knows which action saves it, how to tell whether its
//! snapshot changed, and how to turn a snapshot into a minimal update payload.
//! [`TabSaveCoordinator`] drives any adapter the same way, so saving a rule's
//! details, its Python code or a prompt is one code path.

mod coordinator;
mod prompt;
mod rule;

pub use coordinator::{SaveOutcome, TabSaveCoordinator};
pub use prompt::{PromptAdapter, PromptSnapshot};
pub use rule::{PythonCodeAdapter, PythonCodeSnapshot, RuleDetailsAdapter, RuleDetailsSnapshot};

use serde::Serialize;
use serde_json::{Map, Value};

/// Identifies an open tab: the entity it edits and the tab itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabIds {
    pub entity_id: String,
    pub tab_id: String,
}

impl TabIds {
    pub fn new(entity_id: impl Into<String>, tab_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            tab_id: tab_id.into(),
        }
    }
}

/// Save strategy for one kind of tab.
pub trait TabSaveAdapter {
    type Snapshot: Clone;

    /// Action that persists the tab, e.g. `rule.update`.
    fn action_name(&self) -> &'static str;

    /// Key under which the tab's last-saved snapshot is tracked.
    fn entity_key(&self, ids: &TabIds) -> String;

    /// True when there is no previous snapshot or a tracked field differs.
    fn has_changes(&self, prev: Option<&Self::Snapshot>, curr: &Self::Snapshot) -> bool;

    /// `{ id, ...fields }` with every unset field left out.
    fn build_payload(&self, id: &str, curr: &Self::Snapshot) -> Value;
}

/// Serializes `fields` (whose unset members skip serialization) and adds `id`.
fn payload_with_id(id: &str, fields: &impl Serialize) -> Value {
    let mut map = match serde_json::to_value(fields) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    map.insert("id".to_string(), Value::String(id.to_string()));
    Value::Object(map)
}
