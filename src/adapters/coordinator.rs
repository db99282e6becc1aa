use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

use super::{TabIds, TabSaveAdapter};
use crate::clients::ServerActionClient;
use crate::router::RouterError;

/// Result of [`TabSaveCoordinator::save`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Nothing changed since the last save; no action was run.
    Unchanged,
    /// The action ran; holds its result.
    Saved(Value),
}

/// Tracks the last-saved snapshot of every open tab of one kind.
pub struct TabSaveCoordinator<A: TabSaveAdapter> {
    adapter: A,
    saved: HashMap<String, A::Snapshot>,
}

impl<A: TabSaveAdapter> TabSaveCoordinator<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            saved: HashMap::new(),
        }
    }

    /// Starts tracking a tab with the state it was loaded with.
    pub fn open(&mut self, ids: &TabIds, snapshot: A::Snapshot) {
        self.saved.insert(self.adapter.entity_key(ids), snapshot);
    }

    pub fn is_dirty(&self, ids: &TabIds, curr: &A::Snapshot) -> bool {
        let key = self.adapter.entity_key(ids);
        self.adapter.has_changes(self.saved.get(&key), curr)
    }

    /// Saves `curr` if it differs from the last-saved snapshot.
    ///
    /// The snapshot is only recorded once the action succeeds, so a failed save
    /// leaves the tab dirty.
    pub async fn save(
        &mut self,
        ids: &TabIds,
        curr: &A::Snapshot,
        client: &ServerActionClient,
    ) -> Result<SaveOutcome, RouterError> {
        let key = self.adapter.entity_key(ids);
        if !self.adapter.has_changes(self.saved.get(&key), curr) {
            debug!(%key, "No changes");
            return Ok(SaveOutcome::Unchanged);
        }

        let payload = self.adapter.build_payload(&ids.entity_id, curr);
        let result = client
            .execute_action(self.adapter.action_name(), payload)
            .await?;
        info!(%key, action = self.adapter.action_name(), "Tab saved");
        self.saved.insert(key, curr.clone());
        Ok(SaveOutcome::Saved(result))
    }

    /// Stops tracking a tab, returning its last-saved snapshot.
    pub fn close(&mut self, ids: &TabIds) -> Option<A::Snapshot> {
        self.saved.remove(&self.adapter.entity_key(ids))
    }

    pub fn open_tabs(&self) -> usize {
        self.saved.len()
    }
}
