//! Core data models for the checker
//!
//! A check works on three first lines and produces one [`Verdict`].

use std::fmt;

/// The first line of a file, without its `\n` delimiter.
///
/// Lines are compared byte for byte; content does not need to be UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(Vec<u8>);

impl Line {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Line(bytes.into())
    }

    /// The line used for files that are missing, unreadable, or empty
    pub fn empty() -> Self {
        Line::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop a single trailing `\r` left over from CRLF line endings
    pub fn strip_carriage_return(mut self) -> Self {
        if self.0.last() == Some(&b'\r') {
            self.0.pop();
        }
        self
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Numeric scores the checker can award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Zero,
    Half,
    Full,
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::Zero => 0.0,
            Score::Half => 0.5,
            Score::Full => 1.0,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Zero => write!(f, "0"),
            Score::Half => write!(f, "0.5"),
            Score::Full => write!(f, "1"),
        }
    }
}

/// Sentinel printed instead of a score when all three lines differ
pub const FALLBACK_TOKEN: &str = "Well this shouldn't be here";

/// Outcome of comparing the three first lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Output line equals the input line
    JudgeProblem,
    /// Input line equals the reference line but the output does not
    MatchesInput,
    /// Output line equals the reference line
    Correct,
    /// All three lines are pairwise distinct.
    ///
    /// Reachable in practice. It carries no score and prints
    /// [`FALLBACK_TOKEN`], which a downstream harness cannot parse as a number.
    Unexpected,
}

impl Verdict {
    pub fn score(self) -> Option<Score> {
        match self {
            Verdict::JudgeProblem => Some(Score::Zero),
            Verdict::MatchesInput => Some(Score::Half),
            Verdict::Correct => Some(Score::Full),
            Verdict::Unexpected => None,
        }
    }

    /// Text written to stdout
    pub fn token(self) -> String {
        match self.score() {
            Some(score) => score.to_string(),
            None => FALLBACK_TOKEN.to_string(),
        }
    }

    /// Human-readable reason written to stderr
    pub fn reason(self) -> &'static str {
        match self {
            Verdict::JudgeProblem => "Judge problem",
            Verdict::MatchesInput => "Output doesn't match the judge's output",
            Verdict::Correct => "Correct Output",
            Verdict::Unexpected => "This is OK though",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::JudgeProblem => write!(f, "judge-problem"),
            Verdict::MatchesInput => write!(f, "matches-input"),
            Verdict::Correct => write!(f, "correct"),
            Verdict::Unexpected => write!(f, "unexpected"),
        }
    }
}
