// src/lib.rs

pub mod config;
pub mod extract;
pub mod flatten;
pub mod output;
pub mod route;
pub mod states;

use std::path::PathBuf;

/// Errors shared across the conversion pipeline.
///
/// Every variant is fatal to the run: the tool is operator-driven batch
/// conversion, so the fix is always "repair the input and rerun".
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A state reference table row is unparseable or repeats a name.
    #[error("malformed reference table row {line}: {reason}")]
    MalformedReferenceTable { line: usize, reason: String },

    /// An input file name matches neither report naming pattern.
    #[error("unrecognized input file name `{0}`")]
    UnrecognizedFileName(String),

    /// A data row's token count does not fit the four-per-year layout.
    #[error("data row for `{state}` has {found} value tokens, expected {expected}")]
    RowShapeMismatch {
        state: String,
        expected: usize,
        found: usize,
    },

    /// PDF text extraction failed.
    #[error("failed to extract text from `{path}`: {reason}")]
    Extraction { path: String, reason: String },

    /// A required input path does not exist.
    #[error("missing input path `{}`", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}
