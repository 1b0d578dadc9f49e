//! Error types for model-backed extraction and grading

use thiserror::Error;

/// Terminal failure of a single extraction or grading call
///
/// A recoverable per-field problem is never an error: it becomes an entry in
/// the record's `warnings` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The model answer contains no parseable JSON object
    #[error("Could not parse model response: {0}")]
    ParseFailure(String),

    /// The JSON parsed but its structure cannot be trusted
    #[error("Model response has an invalid shape: {0}")]
    InvalidShape(String),

    /// The model call itself failed
    #[error("Model invocation failed: {0}")]
    UpstreamFailure(String),
}

impl ExtractionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionError::ParseFailure(_) => "parse_failure",
            ExtractionError::InvalidShape(_) => "invalid_shape",
            ExtractionError::UpstreamFailure(_) => "upstream_failure",
        }
    }
}
