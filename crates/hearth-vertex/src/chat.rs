//! Multi-turn chat over the stateless `generateContent` call.

use crate::client::VertexClient;
use crate::{ChatResponse, Content, GenerationConfig, VertexError};

/// A chat session holding accumulated conversation turns.
///
/// Both sides of an exchange are recorded only after the request
/// succeeds, so a failed request leaves the history exactly as it was.
pub struct ChatSession {
    model: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(model: impl Into<String>, history: Vec<Content>) -> Self {
        Self {
            model: model.into(),
            history,
        }
    }

    /// Send one user message and record both sides of the exchange.
    pub async fn send_message(
        &mut self,
        client: &VertexClient,
        text: impl Into<String>,
        config: Option<&GenerationConfig>,
    ) -> Result<ChatResponse, VertexError> {
        let text = text.into();

        let mut contents = self.history.clone();
        contents.push(Content::user(&text));

        let response = client
            .generate_content(&self.model, &contents, config)
            .await?;

        self.history.push(Content::user(text));
        self.history.push(Content::model(&response.text));

        Ok(response)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn into_history(self) -> Vec<Content> {
        self.history
    }
}

impl VertexClient {
    /// Open a chat session seeded with prior history.
    pub fn start_chat(&self, model: impl Into<String>, history: Vec<Content>) -> ChatSession {
        ChatSession::new(model, history)
    }
}
