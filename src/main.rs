//! checker - first-line output checker for judge pipelines
//!
//! Usage: `checker <input> <output> <judge_output>`

mod cli;

use anyhow::Result;
use clap::Parser;
use firstline_checker::config::CheckerConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let (config, config_error) = match CheckerConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (CheckerConfig::default(), Some(e)),
    };

    // Initialize logging; stdout is reserved for the score
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(log_filter(&config.logging.level))
        .init();

    if let Some(e) = config_error {
        tracing::warn!("{}, using default config", e);
    }

    cli::run(cli, &config)
}

/// `CHECKER_LOG`, then `RUST_LOG`, then the configured level
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env("CHECKER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("off"))
}
