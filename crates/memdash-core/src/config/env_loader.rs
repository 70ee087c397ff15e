//! Environment variable overrides
//!
//! Recognized variables, all optional:
//! - `MEMDASH_BACKEND_URL`: backend base URL
//! - `MEMDASH_TIMEOUT_SECS`: request timeout in seconds
//! - `MEMDASH_LOG_LEVEL`: log level filter

use crate::config::model::Config;
use crate::error::{MemdashError, MemdashResult};
use std::env;

/// Apply `MEMDASH_*` environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: &mut Config) -> MemdashResult<()> {
    apply_overrides(config, |name| env::var(name).ok())
}

/// Override pass against an arbitrary variable source, so tests never have
/// to mutate the process environment.
fn apply_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> MemdashResult<()> {
    if let Some(base_url) = lookup("MEMDASH_BACKEND_URL") {
        config.backend.base_url = base_url;
    }

    if let Some(timeout) = lookup("MEMDASH_TIMEOUT_SECS") {
        config.backend.request_timeout_secs = timeout.parse().map_err(|_| {
            MemdashError::config(format!("Invalid MEMDASH_TIMEOUT_SECS value '{timeout}'"))
        })?;
    }

    if let Some(level) = lookup("MEMDASH_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overrides_applied() {
        let env = vars(&[
            ("MEMDASH_BACKEND_URL", "http://override:7000"),
            ("MEMDASH_TIMEOUT_SECS", "5"),
            ("MEMDASH_LOG_LEVEL", "debug"),
        ]);

        let mut config = Config::default();
        apply_overrides(&mut config, |name| env.get(name).cloned()).unwrap();

        assert_eq!(config.backend.base_url, "http://override:7000");
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_absent_vars_leave_config_untouched() {
        let mut config = Config::default();
        apply_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let env = vars(&[("MEMDASH_TIMEOUT_SECS", "soon")]);

        let mut config = Config::default();
        let result = apply_overrides(&mut config, |name| env.get(name).cloned());
        assert!(result.is_err());
    }
}
