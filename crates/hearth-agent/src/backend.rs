//! Seam between the agent and the vendor chat client.

use async_trait::async_trait;

use hearth_vertex::{Content, GenerationConfig, TokenUsage, VertexClient, VertexError};

/// One completed exchange: the model's reply plus the transcript that
/// now includes both new turns.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub text: String,
    pub transcript: Vec<Content>,
    pub usage: TokenUsage,
}

/// Chat backend the agent talks through. Mockable in tests.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_chat(
        &self,
        model: &str,
        history: Vec<Content>,
        text: &str,
        config: &GenerationConfig,
    ) -> Result<ChatTurn, VertexError>;
}

#[async_trait]
impl ChatBackend for VertexClient {
    async fn send_chat(
        &self,
        model: &str,
        history: Vec<Content>,
        text: &str,
        config: &GenerationConfig,
    ) -> Result<ChatTurn, VertexError> {
        let mut session = self.start_chat(model, history);
        let response = session.send_message(self, text, Some(config)).await?;

        Ok(ChatTurn {
            text: response.text,
            transcript: session.into_history(),
            usage: response.usage,
        })
    }
}
