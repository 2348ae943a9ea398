//! Prompt template rendering.

use handlebars::Handlebars;
use serde_json::json;

use crate::AgentError;

/// Renders the configured prompt template against hub state.
pub struct PromptRenderer {
    registry: Handlebars<'static>,
}

impl PromptRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Prompts are plain text, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Render `template` with the hub's current home name.
    pub fn render(&self, template: &str, home_name: &str) -> Result<String, AgentError> {
        self.registry
            .render_template(template, &json!({ "home_name": home_name }))
            .map_err(|e| AgentError::Template(e.to_string()))
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}
