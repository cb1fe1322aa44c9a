//! The tree record data model.
//!
//! A [`TreeRecord`] is one row of the managed table. Records are parsed
//! from raw text fields as produced by the CSV row source; the first four
//! fields are significant and any trailing fields are ignored, matching
//! the source export which carries many more columns than the table keeps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A source row that cannot be turned into a [`TreeRecord`].
///
/// Carries the 1-based line number of the offending row so a failed bulk
/// load can point at its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The row had fewer than the four required fields.
    #[error("row {line}: expected 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    /// The id field did not parse as an integer.
    #[error("row {line}: invalid id '{value}'")]
    InvalidId { line: usize, value: String },
}

/// One row of the tree table: a numeric id plus three free-form text
/// fields in the order the source data supplies them.
///
/// # Examples
///
/// ```
/// use tree_db_core::TreeRecord;
///
/// let record = TreeRecord::new(7, "Private", "Oak", "12 Main St");
/// assert_eq!(record.species, "Oak");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// Unique primary key, supplied by the source data (not generated).
    pub id: i64,
    /// Maintenance authority (e.g. "DPW Maintained").
    pub status: String,
    /// Taxonomic or common species name.
    pub species: String,
    /// Location string.
    pub address: String,
}

impl TreeRecord {
    /// Creates a record from its four fields.
    pub fn new(
        id: i64,
        status: impl Into<String>,
        species: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status: status.into(),
            species: species.into(),
            address: address.into(),
        }
    }

    /// Parses a record from the first four fields of a raw source row.
    ///
    /// `line` is the 1-based position of the row in its source, used only
    /// for error reporting. Fields beyond the fourth are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingFields`] if the row has fewer than
    /// four fields, or [`RecordError::InvalidId`] if the first field is
    /// not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_db_core::{RecordError, TreeRecord};
    ///
    /// let fields: Vec<String> = ["3", "Good", "Oak", "1 A St", "extra"]
    ///     .iter().map(|s| s.to_string()).collect();
    /// let record = TreeRecord::from_fields(1, &fields).unwrap();
    /// assert_eq!(record.address, "1 A St");
    ///
    /// let short: Vec<String> = vec!["3".to_string(), "Good".to_string()];
    /// assert_eq!(
    ///     TreeRecord::from_fields(2, &short),
    ///     Err(RecordError::MissingFields { line: 2, found: 2 }),
    /// );
    /// ```
    pub fn from_fields(line: usize, fields: &[String]) -> Result<Self, RecordError> {
        if fields.len() < 4 {
            return Err(RecordError::MissingFields {
                line,
                found: fields.len(),
            });
        }
        let id = fields[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| RecordError::InvalidId {
                line,
                value: fields[0].clone(),
            })?;
        Ok(Self {
            id,
            status: fields[1].clone(),
            species: fields[2].clone(),
            address: fields[3].clone(),
        })
    }
}
