use ingredient_tagger_core::TaggerError;
use thiserror::Error;

/// Errors raised while reading labelled data or writing training data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The CSV header lacks one or more required columns.
    #[error("CSV header is missing required columns: {missing:?}")]
    InvalidHeader {
        /// The required columns that were not found.
        missing: Vec<String>,
    },

    /// A numeric cell could not be parsed.
    #[error("line {line}: column {column:?} is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tagger(#[from] TaggerError),
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
