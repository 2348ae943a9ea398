//! The conversation agent: one `process` call per utterance.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use hearth_common::ConversationId;
use hearth_config::Options;
use hearth_vertex::{Content, GenerationConfig};

use crate::backend::ChatBackend;
use crate::prompt::PromptRenderer;
use crate::store::SessionStore;
use crate::{
    ConversationAgent, ConversationInput, ConversationResult, HubContext, Reply,
    SupportedLanguages,
};

/// Acknowledgement attributed to the model in the primer pair.
const PRIMER_ACK: &str = "OK";

/// Conversation agent backed by a Vertex AI chat model.
pub struct VertexAgent {
    backend: Arc<dyn ChatBackend>,
    store: Arc<dyn SessionStore>,
    hub: Arc<dyn HubContext>,
    options: Options,
    renderer: PromptRenderer,
}

impl VertexAgent {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        store: Arc<dyn SessionStore>,
        hub: Arc<dyn HubContext>,
        options: Options,
    ) -> Self {
        Self {
            backend,
            store,
            hub,
            options,
            renderer: PromptRenderer::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.options.temperature,
            top_p: self.options.top_p,
            top_k: self.options.top_k,
        }
    }

    /// Continue the caller's conversation only if we actually have its
    /// history; otherwise mint a fresh id.
    async fn resolve_conversation(
        &self,
        input: &ConversationInput,
    ) -> (ConversationId, Vec<Content>) {
        if let Some(id) = &input.conversation_id {
            if let Some(history) = self.store.get(id.as_str()).await {
                return (id.clone(), history);
            }
        }
        (ConversationId::new(), Vec::new())
    }

    /// Overwrite the primer pair at the head of a history.
    ///
    /// Slots 0 and 1 always hold the freshly rendered prompt and the
    /// model's canned acknowledgement; later slots keep the real turns.
    /// Replacing instead of appending keeps re-priming from growing
    /// the history.
    fn refresh_primer(history: &mut Vec<Content>, prompt: String) {
        if history.len() < 2 {
            history.clear();
            history.push(Content::user(prompt));
            history.push(Content::model(PRIMER_ACK));
        } else {
            history[0] = Content::user(prompt);
            history[1] = Content::model(PRIMER_ACK);
        }
    }
}

#[async_trait]
impl ConversationAgent for VertexAgent {
    fn supported_languages(&self) -> SupportedLanguages {
        SupportedLanguages::All
    }

    async fn process(&self, input: ConversationInput) -> ConversationResult {
        let (conversation_id, mut history) = self.resolve_conversation(&input).await;

        let prompt = match self
            .renderer
            .render(&self.options.prompt, &self.hub.home_name())
        {
            Ok(prompt) => prompt,
            Err(err) => {
                error!("error rendering prompt: {err}");
                let speech = format!("Sorry, I had a problem with my template: {err}");
                return ConversationResult {
                    conversation_id,
                    language: input.language,
                    reply: Reply::Error { error: err, speech },
                };
            }
        };

        // The model always sees the current hub state
        Self::refresh_primer(&mut history, prompt);

        debug!(model = %self.options.chat_model, text = %input.text, "sending utterance");

        let turn = match self
            .backend
            .send_chat(
                &self.options.chat_model,
                history,
                &input.text,
                &self.generation_config(),
            )
            .await
        {
            Ok(turn) => turn,
            Err(err) => {
                error!("error generating content: {err}");
                let speech = format!("Sorry, I had a problem talking to Google Generative AI: {err}");
                return ConversationResult {
                    conversation_id,
                    language: input.language,
                    reply: Reply::Error {
                        error: err.into(),
                        speech,
                    },
                };
            }
        };

        debug!(
            input_tokens = turn.usage.input_tokens,
            output_tokens = turn.usage.output_tokens,
            "model response"
        );

        // An empty reply is never stored: the transcript must keep
        // strictly alternating non-empty turns.
        if !turn.text.is_empty() {
            self.store
                .put(conversation_id.as_str(), turn.transcript)
                .await;
        }

        ConversationResult {
            conversation_id,
            language: input.language,
            reply: Reply::Speech(turn.text),
        }
    }
}
