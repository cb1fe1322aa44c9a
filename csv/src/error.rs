//! Error types for the CSV row source.

use thiserror::Error;

/// Errors that can occur while reading rows from a CSV source.
#[derive(Debug, Error)]
pub enum CsvError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax failure (unbalanced quotes, invalid UTF-8, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for results with [`CsvError`].
pub type Result<T> = std::result::Result<T, CsvError>;
