//! Configuration management commands

use crate::console::CliConsole;
use memdash_core::config::{load_from_file, Config};
use memdash_core::error::{MemdashError, MemdashResult};
use std::path::Path;

/// Show current configuration
pub async fn show(config_file: &str) -> MemdashResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration");

    if !Path::new(config_file).exists() {
        console.warn(&format!("Configuration file not found: {config_file}"));
        console.info("Using default configuration");

        print_config(&console, &Config::default());
        return Ok(());
    }

    let config = load_from_file(Path::new(config_file))?;
    console.success(&format!("Loaded configuration from: {config_file}"));

    print_config(&console, &config);
    Ok(())
}

/// Validate configuration
pub async fn validate(config_file: &str) -> MemdashResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Validation");

    if !Path::new(config_file).exists() {
        return Err(MemdashError::config(format!(
            "Configuration file not found: {config_file}"
        )));
    }

    console.info(&format!("Validating configuration file: {config_file}"));

    match load_from_file(Path::new(config_file)) {
        Ok(config) => {
            console.success("Configuration file loaded successfully");

            match config.validate() {
                Ok(()) => {
                    console.success("Configuration is valid");
                    console.print_separator();
                    print_config(&console, &config);
                }
                Err(e) => {
                    console.error(&format!("Configuration validation failed: {e}"));
                    return Err(e);
                }
            }
        }
        Err(e) => {
            console.error(&format!("Failed to load configuration: {e}"));
            return Err(e);
        }
    }

    Ok(())
}

/// Initialize a new configuration file
pub async fn init(config_file: &str, force: bool) -> MemdashResult<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Initialization");

    if Path::new(config_file).exists() && !force {
        console.error(&format!("Configuration file already exists: {config_file}"));
        console.info("Use --force to overwrite");
        return Err(MemdashError::config("Configuration file already exists"));
    }

    let config_json = serde_json::to_string_pretty(&Config::default())
        .map_err(|e| MemdashError::config(format!("Failed to serialize configuration: {e}")))?;

    tokio::fs::write(config_file, config_json)
        .await
        .map_err(|e| MemdashError::config(format!("Failed to write configuration file: {e}")))?;

    console.success(&format!("Created configuration file: {config_file}"));
    console.info("Edit the file to point backend.base_url at your memory backend");

    Ok(())
}

/// Print configuration details
fn print_config(console: &CliConsole, config: &Config) {
    console.info(&format!("Backend URL: {}", config.backend.base_url));
    console.info(&format!(
        "Request timeout: {}s (connect {}s)",
        config.backend.request_timeout_secs, config.backend.connect_timeout_secs
    ));
    console.info(&format!("Log level: {}", config.logging.level));
}
