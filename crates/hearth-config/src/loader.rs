//! TOML config loading: read from path or platform default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use hearth_common::ConfigError;

use crate::options::{Options, DEFAULT_LOCATION};
use crate::validation;

/// Hub-level configuration for the `hearth` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    /// Name injected into the prompt template as `home_name`.
    pub home_name: String,
    /// Language tag echoed back on every conversation result.
    pub language: String,
    /// Path to a service-account key file. When unset, the
    /// GOOGLE_APPLICATION_CREDENTIALS environment variable is consulted.
    pub service_account_path: Option<PathBuf>,
    /// Vertex AI region.
    pub location: String,
    pub options: Options,
}

impl Default for HearthConfig {
    fn default() -> Self {
        Self {
            home_name: "Home".into(),
            language: "en".into(),
            service_account_path: None,
            location: DEFAULT_LOCATION.into(),
            options: Options::default(),
        }
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("hearth").join("config.toml"))
}

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hearth Configuration
# Only override what you want to change -- missing fields use defaults.

# Name the prompt template sees as {{home_name}}.
# home_name = "Home"

# Language tag reported on conversation results.
# language = "en"

# Path to a GCP service-account key file (role: AI Platform Developer).
# When unset, GOOGLE_APPLICATION_CREDENTIALS is used instead.
# service_account_path = "/etc/hearth/service-account.json"

# Vertex AI region.
# location = "us-central1"

[options]
# chat_model = "gemini-pro"
# temperature = 0.25     # 0.0-1.0
# top_p = 0.95           # 0.0-1.0
# top_k = 40             # >= 1
# prompt = """
# Your own prompt template. {{home_name}} expands to the name above.
# """
"##
    .to_string()
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a
/// warning is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<HearthConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: HearthConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed values anyway");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/hearth/config.toml`
/// On Linux: `~/.config/hearth/config.toml`
///
/// If the file does not exist, creates a default config file and
/// returns defaults.
pub fn load_default() -> Result<HearthConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(HearthConfig::default())
        }
        Err(e) => Err(e),
    }
}
