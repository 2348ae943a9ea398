//! Registry mapping config entries to their live agents.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::ConversationAgent;

/// Shared map of entry id to agent. Cloning is cheap; clones share state.
#[derive(Clone, Default)]
pub struct AgentRegistry {
    agents: Arc<RwLock<HashMap<String, Arc<dyn ConversationAgent>>>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the agent for an entry, replacing any previous one.
    pub async fn set_agent(&self, entry_id: &str, agent: Arc<dyn ConversationAgent>) {
        debug!(entry_id, "registering agent");
        self.agents.write().await.insert(entry_id.to_string(), agent);
    }

    /// Remove an entry's agent. Returns whether one was registered.
    pub async fn unset_agent(&self, entry_id: &str) -> bool {
        self.agents.write().await.remove(entry_id).is_some()
    }

    pub async fn agent(&self, entry_id: &str) -> Option<Arc<dyn ConversationAgent>> {
        self.agents.read().await.get(entry_id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.agents.read().await.len()
    }
}
