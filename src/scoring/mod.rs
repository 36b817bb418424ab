//! Judge-side interpretation of checker output
//!
//! The pipeline that runs a checker reads its two streams like this:
//!
//! ```text
//! stdout, first line, trimmed  ->  score, must parse as a number in [0, 1]
//! stderr, first line           ->  comment shown to the contestant
//! ```
//!
//! Anything else fails the checker run. [`interpret`] applies the same rules
//! so a checker's output can be validated before it is wired into a judge.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScoringError {
    #[error("First line of output must contain a single number, the score.")]
    NotANumber { token: String },

    #[error("Score must be between 0 and 1.")]
    OutOfRange { score: f64 },
}

/// A checker run the judge accepted
#[derive(Debug, Clone, PartialEq)]
pub struct GradedRun {
    pub score: f64,
    /// First stderr line, without its line terminator
    pub contestant_comment: String,
}

/// Interpret captured checker stdout/stderr the way the judge does
pub fn interpret(stdout: &str, stderr: &str) -> Result<GradedRun, ScoringError> {
    let token = stdout.lines().next().unwrap_or("").trim();
    let score: f64 = token.parse().map_err(|_| ScoringError::NotANumber {
        token: token.to_string(),
    })?;

    if !(0.0..=1.0).contains(&score) {
        return Err(ScoringError::OutOfRange { score });
    }

    Ok(GradedRun {
        score,
        contestant_comment: stderr.lines().next().unwrap_or("").to_string(),
    })
}
