//! # Settings
//!
//! Runtime settings for the CLI and embedding hosts.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `safe-calc.toml` in the working directory, or an explicit file
//! 3. `SAFE_CALC__*` environment variables, `__` separating sections
//!    (e.g. `SAFE_CALC__LOGGING__LEVEL=debug`)
//!
//! A `.env` file is loaded into the environment first, if present.

use crate::application::error::InfrastructureError;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "safe-calc";
const ENV_PREFIX: &str = "SAFE_CALC";
const ENV_SEPARATOR: &str = "__";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log output.
    pub logging: LoggingSettings,
    /// Result rendering.
    pub output: OutputSettings,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print a calculation record instead of the bare number.
    pub decorated: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Settings {
    /// Loads settings from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] if a source cannot be
    /// read or a value has the wrong type.
    pub fn load() -> Result<Self, InfrastructureError> {
        Self::load_from(None)
    }

    /// Loads settings, reading `path` instead of the default file.
    ///
    /// An explicit path must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] if a source cannot be
    /// read or a value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );
        Self::build(builder)
    }

    /// Parses settings from TOML text, ignoring files and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] on malformed TOML or
    /// mistyped values.
    pub fn from_toml_str(toml: &str) -> Result<Self, InfrastructureError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, InfrastructureError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| InfrastructureError::configuration(e.to_string()))
    }
}
