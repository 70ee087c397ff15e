//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use memdash_core::client::BackendClient;
use memdash_core::config::{self, Config};
use memdash_core::error::MemdashResult;
use std::path::Path;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> MemdashResult<()> {
    let mut config = config::load(Path::new(&cli.config_file))?;
    if let Some(backend_url) = &cli.backend_url {
        config.backend.base_url = backend_url.clone();
    }

    init_tracing(&config);
    tracing::debug!(
        "Configuration loaded from '{}', backend {}",
        cli.config_file,
        config.backend.base_url
    );

    if let Some(command) = cli.command {
        return match command {
            Commands::Show { json } => {
                let client = connect(&config)?;
                commands::show::execute(&client, json, cli.verbose).await
            }
            Commands::Forget {
                category,
                key,
                index,
                yes,
            } => {
                let client = connect(&config)?;
                commands::forget::execute(&client, category, key, index, yes, cli.verbose).await
            }
            Commands::Config { action } => match action {
                ConfigAction::Show => commands::config::show(&cli.config_file).await,
                ConfigAction::Validate => commands::config::validate(&cli.config_file).await,
                ConfigAction::Init { force } => {
                    commands::config::init(&cli.config_file, force).await
                }
            },
        };
    }

    // Default: interactive dashboard
    let client = connect(&config)?;
    commands::dashboard::execute(&client, cli.verbose).await
}

fn connect(config: &Config) -> MemdashResult<BackendClient> {
    config.validate()?;
    BackendClient::new(&config.backend)
}

/// Initialize logging. `RUST_LOG` wins over the configured level; a config
/// with console logging disabled silences everything.
fn init_tracing(config: &Config) {
    let default_filter = if config.logging.log_to_console {
        config.logging.level.clone()
    } else {
        "off".to_string()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // try_init: route() runs once per process, but tests may call it repeatedly
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
