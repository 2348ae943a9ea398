//! Conversation agent backed by Google's generative models.
//!
//! Provides the hub-facing agent with:
//! - Per-conversation history in a pluggable session store
//! - A prompt template rendered against live hub state every turn
//! - Setup-time credential validation and entry registration
//! - Spoken error replies instead of surfaced failures

pub mod agent;
pub mod backend;
pub mod prompt;
pub mod registry;
pub mod setup;
pub mod store;

use async_trait::async_trait;

pub use agent::VertexAgent;
pub use backend::{ChatBackend, ChatTurn};
pub use prompt::PromptRenderer;
pub use registry::AgentRegistry;
pub use setup::{setup_entry, unload_entry, validate_credentials, SetupError};
pub use store::{MemorySessionStore, SessionStore};

use hearth_common::ConversationId;
use hearth_vertex::VertexError;

/// A conversation agent the hub routes utterances to.
#[async_trait]
pub trait ConversationAgent: Send + Sync {
    /// Languages the agent accepts.
    fn supported_languages(&self) -> SupportedLanguages;

    /// Handle one utterance. Failures come back as spoken error
    /// replies, never as an `Err`.
    async fn process(&self, input: ConversationInput) -> ConversationResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportedLanguages {
    All,
    Only(Vec<String>),
}

/// One utterance on its way to an agent.
#[derive(Debug, Clone)]
pub struct ConversationInput {
    pub text: String,
    /// Id of the conversation to continue; `None` starts a new one.
    pub conversation_id: Option<ConversationId>,
    pub language: String,
}

/// What the hub speaks (or logs) after a turn.
#[derive(Debug, Clone)]
pub struct ConversationResult {
    pub conversation_id: ConversationId,
    pub language: String,
    pub reply: Reply,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Speech(String),
    Error { error: AgentError, speech: String },
}

impl Reply {
    /// Text to hand to the voice pipeline, whichever side it came from.
    pub fn speech(&self) -> &str {
        match self {
            Reply::Speech(text) => text,
            Reply::Error { speech, .. } => speech,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AgentError {
    #[error("template error: {0}")]
    Template(String),

    #[error(transparent)]
    Backend(#[from] VertexError),
}

/// Host state the agent reads at render time.
pub trait HubContext: Send + Sync {
    /// Friendly name of the home, exposed to templates as `home_name`.
    fn home_name(&self) -> String;
}
