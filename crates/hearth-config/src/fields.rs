//! Declarative form schemas for the setup wizard and the options panel.
//!
//! Pure data: a host UI renders these fields however it likes. Each
//! field carries the value currently in effect (`suggested`) next to
//! the documented `default`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::options::{
    Options, DEFAULT_CHAT_MODEL, DEFAULT_LOCATION, DEFAULT_PROMPT, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_K, DEFAULT_TOP_P,
};

/// Input widget for one form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    Text,
    Template,
    Number { min: f64, max: f64, step: f64 },
    Integer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub key: String,
    pub required: bool,
    pub selector: Selector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// Fields for the wizard's first form.
pub fn setup_schema() -> Vec<FormField> {
    vec![
        FormField {
            key: "service_account".into(),
            required: true,
            selector: Selector::Text,
            suggested: None,
            default: None,
        },
        FormField {
            key: "location".into(),
            required: false,
            selector: Selector::Text,
            suggested: None,
            default: Some(json!(DEFAULT_LOCATION)),
        },
    ]
}

/// Editable option fields, pre-filled from the options currently in
/// effect.
pub fn options_schema(options: &Options) -> Vec<FormField> {
    vec![
        FormField {
            key: "prompt".into(),
            required: false,
            selector: Selector::Template,
            suggested: Some(json!(options.prompt)),
            default: Some(json!(DEFAULT_PROMPT)),
        },
        FormField {
            key: "chat_model".into(),
            required: false,
            selector: Selector::Text,
            suggested: Some(json!(options.chat_model)),
            default: Some(json!(DEFAULT_CHAT_MODEL)),
        },
        FormField {
            key: "temperature".into(),
            required: false,
            selector: Selector::Number {
                min: 0.0,
                max: 1.0,
                step: 0.05,
            },
            suggested: Some(json!(options.temperature)),
            default: Some(json!(DEFAULT_TEMPERATURE)),
        },
        FormField {
            key: "top_p".into(),
            required: false,
            selector: Selector::Number {
                min: 0.0,
                max: 1.0,
                step: 0.05,
            },
            suggested: Some(json!(options.top_p)),
            default: Some(json!(DEFAULT_TOP_P)),
        },
        FormField {
            key: "top_k".into(),
            required: false,
            selector: Selector::Integer,
            suggested: Some(json!(options.top_k)),
            default: Some(json!(DEFAULT_TOP_K)),
        },
    ]
}
