//! Calculator configuration with TOML file support.

use bomm_types::{Decimal, Timestamp, TokenDescriptor, TypesError};
use bomm_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Unit of timestamps given on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Milliseconds, the unit of the lock math.
    #[default]
    Millis,
    /// Microseconds, the unit of chain timestamps.
    Micros,
}

impl TimeUnit {
    pub fn timestamp(&self, raw: Decimal) -> Result<Timestamp, TypesError> {
        match self {
            Self::Millis => Timestamp::from_millis(raw),
            Self::Micros => Timestamp::from_micros(raw),
        }
    }
}

/// Configuration for the `bomm` calculator.
///
/// Loaded from a TOML file via [`CalcConfig::from_toml_file`]; every field has
/// a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Unit of `--now` and of timestamp arguments.
    #[serde(default)]
    pub time_unit: TimeUnit,

    /// Token used to label bOMM amounts in human output.
    #[serde(default = "default_token")]
    pub token: TokenDescriptor,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_token() -> TokenDescriptor {
    TokenDescriptor::bomm()
}

impl CalcConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            time_unit: TimeUnit::default(),
            token: default_token(),
        }
    }
}
