//! Verdict output
//!
//! The token goes to stdout and the reason to stderr, one line each.

use crate::models::Verdict;
use std::io::{self, Write};

/// Write a verdict to the given stdout/stderr pair and flush both
pub fn write_verdict<O, E>(out: &mut O, err: &mut E, verdict: Verdict) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    writeln!(out, "{}", verdict.token())?;
    out.flush()?;
    writeln!(err, "{}", verdict.reason())?;
    err.flush()
}
