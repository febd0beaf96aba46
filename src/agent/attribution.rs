// ABOUTME: AttributionRegistry - session-scoped side table mapping a
// ABOUTME: tool-use id to the subagent type it spawned. Display only.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Label returned for ids that were never recorded.
const UNKNOWN_LABEL: &str = "unknown";

/// Insert-only map from tool-use id to subagent type, used to label
/// output. Never consulted to decide which subagent runs.
///
/// Created at session start and cleared at session end; clones share
/// state.
#[derive(Default)]
pub struct AttributionRegistry {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl AttributionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which subagent type a tool-use id spawned. Write-once:
    /// the first recording for an id wins.
    pub async fn record(&self, tool_use_id: impl Into<String>, agent_type: impl Into<String>) {
        let mut entries = self.entries.write().await;
        entries
            .entry(tool_use_id.into())
            .or_insert_with(|| agent_type.into());
    }

    /// Label for a tool-use id. Best-effort: missing entries render as
    /// "unknown" rather than failing.
    pub async fn label(&self, tool_use_id: &str) -> String {
        let entries = self.entries.read().await;
        entries
            .get(tool_use_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    /// Number of recorded attributions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if no attributions are recorded.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop all recorded attributions. Called at session end.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Clone for AttributionRegistry {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
