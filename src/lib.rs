//! First-line output checker for competitive-programming judges
//!
//! The binary compares the first lines of three files and prints a score.
//! The library exposes the comparison, the configuration, and the judge-side
//! reading of checker output.

pub mod checker;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use checker::{check_files, judge, Submission};
pub use models::{Line, Score, Verdict};
