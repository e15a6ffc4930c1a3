//! Configuration management for the `flightreg` binary.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::registry::RegistryConfig;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user's config dir.
const CONFIG_DIR_NAME: &str = "flightregistry";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FLIGHTREG_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTREG_`, sections split on `__`,
///    e.g. `FLIGHTREG_OUTPUT__FORMAT=json`)
/// 2. TOML config file at `~/.config/flightregistry/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry behavior.
    pub registry: RegistryConfig,
    /// Output rendering.
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when a command doesn't pass `--format`.
    pub format: OutputFormat,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A config file that doesn't exist is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        for status in &self.registry.extra_statuses {
            if status.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "extra_statuses cannot contain an empty status".to_string(),
                });
            }
            if status.chars().any(char::is_whitespace) {
                return Err(Error::ConfigValidation {
                    message: format!("extra_statuses entry '{status}' contains whitespace"),
                });
            }
        }

        Ok(())
    }

    /// Pick the output format, letting an explicit choice override the config.
    #[must_use]
    pub fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.output.format)
    }
}
