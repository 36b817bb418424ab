//! Configuration module for the checker
//!
//! This module handles:
//! - The optional `checker.toml` file named by `CHECKER_CONFIG`
//! - Environment variable overrides

mod checker_config;

pub use checker_config::{CheckerConfig, ConfigError, InputConfig, LoggingConfig};
