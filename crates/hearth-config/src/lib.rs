//! Hearth configuration system.
//!
//! TOML-based hub configuration plus the per-entry model options, with
//! documented defaults, collected-error validation, and the declarative
//! form schemas the setup wizard and options panel render. All config
//! sections use sensible defaults so partial configs work out of the
//! box.

pub mod entry;
pub mod fields;
pub mod loader;
pub mod options;
pub mod validation;

pub use entry::{ConfigEntry, DEFAULT_TITLE};
pub use fields::{options_schema, setup_schema, FormField, Selector};
pub use loader::{default_config_path, load_default, load_from_path, HearthConfig};
pub use options::{
    Options, DEFAULT_CHAT_MODEL, DEFAULT_LOCATION, DEFAULT_PROMPT, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_K, DEFAULT_TOP_P,
};
pub use validation::{validate, validate_options};

/// Serialize a form schema to a pretty-printed JSON string.
pub fn schema_to_json(fields: &[FormField]) -> String {
    serde_json::to_string_pretty(fields)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize schema: {e}\"}}"))
}
