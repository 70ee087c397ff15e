//! Configuration loading and validation
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! `MEMDASH_*` environment variables, CLI flags (applied by the CLI crate).

mod env_loader;
mod file_loader;
mod model;

pub use env_loader::apply_env_overrides;
pub use file_loader::load_from_file;
pub use model::{BackendConfig, Config, LoggingConfig};

use crate::error::MemdashResult;
use std::path::Path;

/// Load configuration from a file and apply environment overrides.
pub fn load(path: &Path) -> MemdashResult<Config> {
    let mut config = load_from_file(path)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}
