//! Checker configuration
//!
//! Supports loading config from:
//! - A TOML file whose path is in `CHECKER_CONFIG`
//! - Environment variables
//!
//! With neither present the defaults reproduce the plain three-argument
//! checker exactly.
//!
//! ```toml
//! [input]
//! strip_carriage_return = false
//!
//! [logging]
//! level = "off"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Env var naming the config file
pub const CONFIG_PATH_ENV: &str = "CHECKER_CONFIG";

/// Env var overriding `input.strip_carriage_return`
pub const STRIP_CR_ENV: &str = "CHECKER_STRIP_CR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: '{value}' (expected true/false, yes/no, or 1/0)")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Remove a trailing `\r` from each first line before comparing
    #[serde(default)]
    pub strip_carriage_return: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter used when neither `CHECKER_LOG` nor `RUST_LOG` is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "off".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl CheckerConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. The file named by `CHECKER_CONFIG`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// Same as [`CheckerConfig::load`] with a custom variable lookup
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => CheckerConfig::default(),
        };
        config.apply_env(&lookup)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded checker config from {}", path.display());
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(STRIP_CR_ENV) {
            self.input.strip_carriage_return = parse_bool(STRIP_CR_ENV, &value)?;
        }
        Ok(())
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}
