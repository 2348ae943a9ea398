mod cli;
mod repl;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hearth_agent::{
    setup_entry, unload_entry, validate_credentials, AgentRegistry, HubContext, MemorySessionStore,
};
use hearth_common::{ConfigError, HearthError};
use hearth_config::{options_schema, schema_to_json, ConfigEntry, HearthConfig};

/// Hub state backed by the loaded config file.
struct ConfigHub {
    home_name: String,
}

impl HubContext for ConfigHub {
    fn home_name(&self) -> String {
        self.home_name.clone()
    }
}

fn load_config(path_override: Option<&str>) -> HearthConfig {
    let loaded = match path_override {
        Some(path) => hearth_config::load_from_path(Path::new(path)),
        None => hearth_config::load_default(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        HearthConfig::default()
    })
}

/// Read the service-account key, preferring the config over the
/// standard Google environment variable.
fn read_service_account(config: &HearthConfig) -> hearth_common::Result<String> {
    let path = config
        .service_account_path
        .clone()
        .or_else(|| {
            std::env::var("GOOGLE_APPLICATION_CREDENTIALS")
                .ok()
                .map(PathBuf::from)
        })
        .ok_or_else(|| {
            ConfigError::CredentialError(
                "no service account key: set service_account_path in the config \
                 or GOOGLE_APPLICATION_CREDENTIALS in the environment"
                    .into(),
            )
        })?;

    let raw = std::fs::read_to_string(&path).map_err(|e| {
        ConfigError::CredentialError(format!("cannot read key file {}: {e}", path.display()))
    })?;
    Ok(raw)
}

async fn run(args: cli::Args) -> hearth_common::Result<()> {
    let config = load_config(args.config.as_deref());

    match args.command.unwrap_or(cli::Command::Chat) {
        cli::Command::Options => {
            println!("{}", schema_to_json(&options_schema(&config.options)));
            Ok(())
        }

        cli::Command::Validate => {
            let raw = read_service_account(&config)?;
            match validate_credentials(&raw, &config.location).await {
                Ok(()) => {
                    println!("ok");
                    Ok(())
                }
                Err(err) => {
                    println!("{}", err.form_key());
                    Err(HearthError::Setup(err.to_string()))
                }
            }
        }

        cli::Command::Chat => {
            let raw = read_service_account(&config)?;

            let registry = AgentRegistry::new();
            let store = Arc::new(MemorySessionStore::new());
            let hub = Arc::new(ConfigHub {
                home_name: config.home_name.clone(),
            });

            let entry = ConfigEntry::new(raw, Some(config.location.clone()))
                .with_options(config.options.clone());

            setup_entry(&registry, &entry, store, hub)
                .await
                .map_err(|err| HearthError::Setup(format!("{err} ({})", err.form_key())))?;

            let agent = registry
                .agent(&entry.entry_id)
                .await
                .ok_or_else(|| HearthError::Agent("no agent registered after setup".into()))?;

            let outcome = repl::run(agent, config.language.clone()).await;
            unload_entry(&registry, &entry.entry_id).await;
            info!("shutdown complete");
            outcome
        }
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let directive = args.log_level.as_deref().unwrap_or("hearth=info");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into()))
        .init();

    info!("hearth v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(1);
    }
}
