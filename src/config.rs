//! Configuration management for the EDI++ validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Ruleset file resolution

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments for the EDI++ validator
#[derive(Debug, Parser)]
#[command(name = "epp-validate")]
#[command(about = "Structural validator for EDI++ (.epp) interchange files")]
#[command(version)]
pub struct Args {
    /// Path to the .epp file to validate
    pub file: PathBuf,

    /// Custom ruleset to use instead of the built-in allow-lists
    #[arg(long, help = "Ruleset TOML file with custom allow-lists")]
    pub ruleset: Option<PathBuf>,

    /// Log level for the validator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File to validate
    pub file: PathBuf,
    /// Ruleset file explicitly set via command line
    pub cli_ruleset: Option<PathBuf>,
    /// Default ruleset locations to search
    pub default_ruleset_paths: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Default user ruleset location, used only when present
        let mut default_ruleset_paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            default_ruleset_paths.push(config_dir.join("epp-validate").join("ruleset.toml"));
        }

        Ok(Config {
            file: args.file,
            cli_ruleset: args.ruleset,
            default_ruleset_paths,
            log_level: args.log_level,
        })
    }

    /// Ruleset file to load, if any
    ///
    /// An explicitly given `--ruleset` always wins, even if the path does
    /// not exist (loading it then fails loudly instead of silently falling
    /// back). Default locations are only used when the file is present.
    pub fn ruleset_source(&self) -> Option<&Path> {
        if let Some(path) = &self.cli_ruleset {
            return Some(path);
        }
        self.default_ruleset_paths
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }
}
