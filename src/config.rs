//! Configuration handling for the roster CLI
//!
//! Configuration is an optional TOML file, read only from the path given with
//! `--config`. Without that flag the built-in defaults apply: no environment
//! variable or per-user file changes the output.
//!
//! ```toml
//! default_format = "json"
//!
//! [layout]
//! name_width = 12
//! id_width = 4
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ReportLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Report column widths
    pub layout: ReportLayout,
}

impl Config {
    /// Loads configuration from `explicit`, or the defaults when no path is given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads and validates a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates TOML config text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.name_width == 0 {
            return Err(ConfigError::Invalid("layout.name_width must be at least 1".into()));
        }
        if self.layout.id_width == 0 {
            return Err(ConfigError::Invalid("layout.id_width must be at least 1".into()));
        }
        Ok(())
    }
}
