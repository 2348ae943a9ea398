//! Conversation history storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use hearth_vertex::Content;

/// Where conversation transcripts live between turns.
///
/// The agent only ever reads a whole history and writes a whole
/// history; there is no partial update.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stored history for a conversation id, if any.
    async fn get(&self, conversation_id: &str) -> Option<Vec<Content>>;

    /// Replace the stored history for a conversation id.
    async fn put(&self, conversation_id: &str, history: Vec<Content>);
}

/// In-memory store; conversations live for the life of the process.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Vec<Content>>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check if a conversation exists.
    pub async fn contains(&self, conversation_id: &str) -> bool {
        self.sessions.read().await.contains_key(conversation_id)
    }

    /// Number of stored conversations.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, conversation_id: &str) -> Option<Vec<Content>> {
        self.sessions.read().await.get(conversation_id).cloned()
    }

    async fn put(&self, conversation_id: &str, history: Vec<Content>) {
        self.sessions
            .write()
            .await
            .insert(conversation_id.to_string(), history);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_unknown_returns_none() {
        let store = MemorySessionStore::new();
        assert!(store.get("nope").await.is_none());
        assert!(!store.contains("nope").await);
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemorySessionStore::new();
        let history = vec![Content::user("hi"), Content::model("hello")];

        store.put("conv-1", history.clone()).await;

        assert!(store.contains("conv-1").await);
        assert_eq!(store.get("conv-1").await.unwrap(), history);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn put_replaces_wholesale() {
        let store = MemorySessionStore::new();
        store.put("conv-1", vec![Content::user("old")]).await;

        let newer = vec![
            Content::user("prompt"),
            Content::model("OK"),
            Content::user("hi"),
            Content::model("hello"),
        ];
        store.put("conv-1", newer.clone()).await;

        assert_eq!(store.get("conv-1").await.unwrap(), newer);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn conversations_are_independent() {
        let store = MemorySessionStore::new();
        store.put("a", vec![Content::user("one")]).await;
        store.put("b", vec![Content::user("two")]).await;

        assert_eq!(store.get("a").await.unwrap()[0].text(), "one");
        assert_eq!(store.get("b").await.unwrap()[0].text(), "two");
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_sessions() {
        let store = MemorySessionStore::new();
        let view = store.clone();

        store.put("shared", vec![Content::user("hi")]).await;
        assert!(view.contains("shared").await);
    }
}
