//! CLI definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use firstline_checker::checker;
use firstline_checker::config::CheckerConfig;
use firstline_checker::reporters;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// First-line checker for judge pipelines
///
/// Compares the first line of the contestant input, the contestant output
/// and the judge output. Prints the score on stdout and the reason on stderr.
#[derive(Parser, Debug)]
#[command(name = "checker")]
#[command(
    version,
    about = "Compare the first lines of input, output and judge output",
    after_help = "\
Verdicts (stdout / stderr):
  0                            Judge problem (output equals input)
  0.5                          Output doesn't match the judge's output
  1                            Correct Output
  Well this shouldn't be here  This is OK though (all three lines differ)

Missing or unreadable files are read as empty lines.

Environment:
  CHECKER_CONFIG     Path to a checker.toml file
  CHECKER_STRIP_CR   Strip a trailing '\\r' from each first line
  CHECKER_LOG        Log filter (falls back to RUST_LOG), logs go to stderr"
)]
pub struct Cli {
    /// Contestant input file
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Contestant output file
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Judge (reference) output file
    #[arg(value_name = "JUDGE_OUTPUT", allow_hyphen_values = true)]
    pub judge_output: Option<PathBuf>,

    /// Extra arguments are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

/// Check the three files and write the verdict
pub fn run(cli: Cli, config: &CheckerConfig) -> Result<()> {
    if !cli.rest.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", cli.rest.len());
    }

    let verdict = checker::check_files(
        cli.input.as_deref(),
        cli.output.as_deref(),
        cli.judge_output.as_deref(),
        config,
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    reporters::write_verdict(&mut stdout.lock(), &mut stderr.lock(), verdict)
        .context("Failed to write verdict")?;

    Ok(())
}
