//! First-line comparison
//!
//! Reads the first line of the contestant input, the contestant output and
//! the reference output, then picks a verdict:
//!
//! | Condition                    | Verdict                  |
//! |------------------------------|--------------------------|
//! | input == output              | `JudgeProblem` (`0`)     |
//! | input == reference           | `MatchesInput` (`0.5`)   |
//! | output == reference          | `Correct` (`1`)          |
//! | otherwise                    | `Unexpected` (sentinel)  |
//!
//! Conditions are tested in that order, so two empty lines always compare
//! equal and an all-empty submission is a `JudgeProblem`.

use crate::config::CheckerConfig;
use crate::models::{Line, Verdict};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// The three first lines of one check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub input: Line,
    pub output: Line,
    pub reference: Line,
}

impl Submission {
    pub fn new(
        input: impl Into<Line>,
        output: impl Into<Line>,
        reference: impl Into<Line>,
    ) -> Self {
        Submission {
            input: input.into(),
            output: output.into(),
            reference: reference.into(),
        }
    }

    fn strip_carriage_returns(self) -> Self {
        Submission {
            input: self.input.strip_carriage_return(),
            output: self.output.strip_carriage_return(),
            reference: self.reference.strip_carriage_return(),
        }
    }
}

/// Read bytes up to, not including, the first `\n`.
///
/// An empty source gives an empty line. A `\r` before the `\n` is kept.
pub fn read_first_line<R: BufRead>(mut reader: R) -> io::Result<Line> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Line::new(buf))
}

/// First line of the file at `path`, or an empty line if it cannot be read
pub fn first_line_of(path: &Path) -> Line {
    let line = File::open(path).and_then(|file| read_first_line(BufReader::new(file)));
    match line {
        Ok(line) => {
            debug!("Read first line of {} ({} bytes)", path.display(), line.len());
            line
        }
        Err(e) => {
            warn!("Treating {} as empty: {}", path.display(), e);
            Line::empty()
        }
    }
}

/// Like [`first_line_of`], with a missing argument read as an empty line
fn first_line_of_arg(path: Option<&Path>, role: &str) -> Line {
    match path {
        Some(path) => first_line_of(path),
        None => {
            warn!("No {} path given, treating it as empty", role);
            Line::empty()
        }
    }
}

/// Apply the decision order to three lines
pub fn judge(submission: &Submission) -> Verdict {
    let Submission {
        input,
        output,
        reference,
    } = submission;

    if input == output {
        Verdict::JudgeProblem
    } else if input == reference {
        Verdict::MatchesInput
    } else if output == reference {
        Verdict::Correct
    } else {
        warn!(
            "All three first lines differ (input={:?}, output={:?}, reference={:?})",
            input.to_string(),
            output.to_string(),
            reference.to_string()
        );
        Verdict::Unexpected
    }
}

/// Read the three files and judge their first lines
pub fn check_files(
    input: Option<&Path>,
    output: Option<&Path>,
    reference: Option<&Path>,
    config: &CheckerConfig,
) -> Verdict {
    let mut submission = Submission {
        input: first_line_of_arg(input, "input"),
        output: first_line_of_arg(output, "output"),
        reference: first_line_of_arg(reference, "judge output"),
    };
    if config.input.strip_carriage_return {
        submission = submission.strip_carriage_returns();
    }

    let verdict = judge(&submission);
    debug!("Verdict: {}", verdict);
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(content: &[u8]) -> Line {
        read_first_line(Cursor::new(content)).unwrap()
    }

    #[test]
    fn test_read_first_line() {
        assert_eq!(read(b"5\n6\n"), Line::from("5"));
        assert_eq!(read(b"no newline"), Line::from("no newline"));
        assert_eq!(read(b""), Line::empty());
        assert_eq!(read(b"\nsecond"), Line::empty());
    }

    #[test]
    fn test_read_first_line_keeps_carriage_return() {
        assert_eq!(read(b"5\r\n"), Line::from("5\r"));
    }

    #[test]
    fn test_read_first_line_keeps_whitespace() {
        assert_eq!(read(b"  5 \n"), Line::from("  5 "));
    }

    #[test]
    fn test_judge_input_equals_output() {
        assert_eq!(judge(&Submission::new("5", "5", "9")), Verdict::JudgeProblem);
        // Input == output wins even when everything matches
        assert_eq!(judge(&Submission::new("5", "5", "5")), Verdict::JudgeProblem);
    }

    #[test]
    fn test_judge_input_equals_reference() {
        assert_eq!(judge(&Submission::new("5", "6", "5")), Verdict::MatchesInput);
    }

    #[test]
    fn test_judge_output_equals_reference() {
        assert_eq!(judge(&Submission::new("3", "7", "7")), Verdict::Correct);
    }

    #[test]
    fn test_judge_all_distinct() {
        assert_eq!(judge(&Submission::new("1", "2", "3")), Verdict::Unexpected);
    }

    #[test]
    fn test_judge_empty_lines_compare_equal() {
        assert_eq!(judge(&Submission::default()), Verdict::JudgeProblem);
        assert_eq!(judge(&Submission::new("", "7", "")), Verdict::MatchesInput);
        assert_eq!(judge(&Submission::new("3", "", "")), Verdict::Correct);
    }

    #[test]
    fn test_judge_compares_raw_bytes() {
        let submission = Submission::new(
            Line::new(vec![0xff]),
            Line::new(vec![0xfe]),
            Line::new(vec![0xfe]),
        );
        assert_eq!(judge(&submission), Verdict::Correct);

        // All three render as U+FFFD but the bytes differ
        let submission = Submission::new(
            Line::new(vec![0xff]),
            Line::new(vec![0xfe]),
            Line::new(vec![0xfd]),
        );
        assert_eq!(submission.output.to_string(), submission.reference.to_string());
        assert_eq!(judge(&submission), Verdict::Unexpected);
    }

    #[test]
    fn test_check_files_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        let reference = dir.path().join("judge.txt");
        std::fs::write(&input, b"\xff\n").unwrap();
        std::fs::write(&output, b"\xfe\n").unwrap();
        std::fs::write(&reference, b"\xfe\nrest\n").unwrap();

        let verdict = check_files(
            Some(&input),
            Some(&output),
            Some(&reference),
            &CheckerConfig::default(),
        );
        assert_eq!(verdict, Verdict::Correct);
    }

    #[test]
    fn test_first_line_of_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(first_line_of(&dir.path().join("absent.txt")), Line::empty());
    }

    #[test]
    fn test_first_line_of_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(first_line_of(dir.path()), Line::empty());
    }

    #[test]
    fn test_check_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        let reference = dir.path().join("judge.txt");
        std::fs::write(&input, "3\nrest\n").unwrap();
        std::fs::write(&output, "7\nignored\n").unwrap();
        std::fs::write(&reference, "7\ndifferent\n").unwrap();

        let verdict = check_files(
            Some(&input),
            Some(&output),
            Some(&reference),
            &CheckerConfig::default(),
        );
        assert_eq!(verdict, Verdict::Correct);
    }

    #[test]
    fn test_check_files_missing_arguments() {
        let verdict = check_files(None, None, None, &CheckerConfig::default());
        assert_eq!(verdict, Verdict::JudgeProblem);
    }

    #[test]
    fn test_check_files_carriage_return_handling() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        let reference = dir.path().join("judge.txt");
        std::fs::write(&input, "3\n").unwrap();
        std::fs::write(&output, "7\r\n").unwrap();
        std::fs::write(&reference, "7\n").unwrap();

        let strict = CheckerConfig::default();
        assert_eq!(
            check_files(Some(&input), Some(&output), Some(&reference), &strict),
            Verdict::Unexpected
        );

        let mut lenient = CheckerConfig::default();
        lenient.input.strip_carriage_return = true;
        assert_eq!(
            check_files(Some(&input), Some(&output), Some(&reference), &lenient),
            Verdict::Correct
        );
    }
}
