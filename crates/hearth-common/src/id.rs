use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_conversation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn new_entry_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    uuid.simple().to_string()
}

/// Opaque handle for one multi-turn conversation. Ids arriving from
/// clients are kept verbatim, so this wraps an arbitrary string rather
/// than a parsed uuid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new() -> Self {
        Self(new_conversation_id())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
