//! Google Vertex AI client.
//!
//! Talks to the `generateContent` endpoint of the Vertex AI publisher
//! API using service-account credentials:
//! - Service-account key parsing with secret redaction
//! - JWT-bearer token exchange with in-process caching
//! - Multi-turn chat sessions over stateless requests
//! - Token usage tracking

pub mod chat;
pub mod client;
pub mod credentials;
pub mod token;

pub use chat::ChatSession;
pub use client::VertexClient;
pub use credentials::ServiceAccountKey;
pub use token::TokenProvider;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Part {
    pub text: String,
}

/// Sampling parameters forwarded to the model. Serialized in the
/// camelCase form the API expects.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VertexError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("connectivity error: {0}")]
    Connectivity(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}
