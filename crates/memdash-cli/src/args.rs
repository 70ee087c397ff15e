//! CLI argument definitions using clap
//!
//! - memdash                          # Interactive dashboard (default)
//! - memdash show [--json]            # One-shot render
//! - memdash forget profile --key name
//! - memdash forget notes --index 2
//! - memdash config init/show/validate

use clap::{Parser, Subcommand, ValueEnum};
use memdash_core::memory::ForgetCategory;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "memdash_config.json";

#[derive(Parser)]
#[command(name = "memdash")]
#[command(about = "Terminal dashboard for an assistant memory backend")]
#[command(
    long_about = r#"Terminal dashboard for an assistant memory backend

USAGE:
  memdash                          # Interactive dashboard
  memdash show                     # Fetch and render once
  memdash show --json              # Print the memory document as JSON
  memdash forget profile --key name
  memdash forget notes --index 2

UTILITY COMMANDS:
  memdash config init              # Create config file
  memdash config show              # Show current config
  memdash config validate          # Validate config file

For detailed help: memdash --help"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Backend base URL (overrides config file and environment)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the memory document and render the dashboard once
    Show {
        /// Print the memory document as pretty JSON instead of the dashboard
        #[arg(long)]
        json: bool,
    },

    /// Forget a single memory item, then render the updated dashboard
    Forget {
        /// Category holding the item
        #[arg(value_enum)]
        category: CategoryArg,

        /// Key of a profile/preferences entry
        #[arg(long, conflicts_with = "index")]
        key: Option<String>,

        /// Zero-based index of a note
        #[arg(long)]
        index: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Category argument for `memdash forget`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    /// Profile fields, addressed by key
    Profile,
    /// Preference fields, addressed by key
    #[value(alias = "preferences")]
    Prefs,
    /// Notes, addressed by index
    Notes,
}

impl From<CategoryArg> for ForgetCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Profile => ForgetCategory::Profile,
            CategoryArg::Prefs => ForgetCategory::Preferences,
            CategoryArg::Notes => ForgetCategory::Notes,
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show,

    /// Validate configuration file for errors
    Validate,

    /// Create a new configuration file with defaults
    Init {
        /// Overwrite existing file without prompting
        #[arg(long)]
        force: bool,
    },
}
