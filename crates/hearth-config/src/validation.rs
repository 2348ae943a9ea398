//! Configuration validation.
//!
//! Checks every numeric range and required string, collecting all
//! violations into a single `ConfigError`.

use hearth_common::ConfigError;

use crate::loader::HearthConfig;
use crate::options::Options;

/// Run all validations on a hub config, collecting all errors.
pub fn validate(config: &HearthConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.location.is_empty() {
        errors.push("location must not be empty".into());
    }

    collect_options_errors(&mut errors, &config.options);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate a standalone options set (used when the host edits options
/// outside a full config file).
pub fn validate_options(options: &Options) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    collect_options_errors(&mut errors, options);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn collect_options_errors(errors: &mut Vec<String>, options: &Options) {
    validate_range_f64(errors, "options.temperature", options.temperature, 0.0, 1.0);
    validate_range_f64(errors, "options.top_p", options.top_p, 0.0, 1.0);

    if options.top_k < 1 {
        errors.push(format!(
            "options.top_k = {} must be at least 1",
            options.top_k
        ));
    }
    if options.chat_model.is_empty() {
        errors.push("options.chat_model must not be empty".into());
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
