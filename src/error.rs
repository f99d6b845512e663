//! Error types for forage.

use thiserror::Error;

/// Result type for forage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for forage operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus loading error (missing or unreadable data files).
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Parse error (malformed JSON or JSONL content).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Extraction failed.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Evaluation error.
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a dataset error.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Error::Dataset(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create an extraction error.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Error::Extraction(msg.into())
    }

    /// Create an evaluation error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Error::Evaluation(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
