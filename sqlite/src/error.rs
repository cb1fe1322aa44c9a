//! Error types for tree store operations.
//!
//! Provides a unified error type covering identifier validation, row
//! parsing, and engine-level failures.

use thiserror::Error;
use tree_db_core::{InvalidIdentifier, RecordError};

/// Errors that can occur during tree store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A table or column name failed the safe-identifier grammar.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// A source row could not be parsed during bulk load; the whole
    /// batch is rejected.
    #[error("malformed row: {0}")]
    MalformedRow(#[from] RecordError),

    /// The storage file could not be opened or a statement failed at the
    /// engine level.
    #[error("storage unavailable: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
