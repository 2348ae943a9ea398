//! Per-entry tunable options and their documented defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_MODEL: &str = "gemini-pro";
pub const DEFAULT_TEMPERATURE: f64 = 0.25;
pub const DEFAULT_TOP_P: f64 = 0.95;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Built-in prompt template. `{{home_name}}` is the single variable the
/// hub provides at render time.
pub const DEFAULT_PROMPT: &str = r#"This smart home is named {{home_name}} and is controlled by a home automation hub.

Answer the user's questions about the world truthfully. Keep responses short and conversational, since they are read aloud by a voice assistant.

If the user asks you to control a device, explain that device control is not yet supported and suggest using the hub's companion app instead."#;

/// Editable options for one provisioned entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub prompt: String,
    pub chat_model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.into(),
            chat_model: DEFAULT_CHAT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }
}
