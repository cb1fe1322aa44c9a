//! Core types for the tree database.
//!
//! This crate defines the foundational pieces shared by the storage backend
//! and the CLI:
//!
//! - [`TreeRecord`] — one row of the managed table (id, status, species,
//!   address), parsed from raw text fields.
//! - [`validate_identifier`] — the allow-list check every table and column
//!   name must pass before it is interpolated into a SQL statement.
//!
//! No I/O happens here; reading rows from disk belongs to `tree-db-csv`
//! and persistence belongs to `tree-db-sqlite`.
//!
//! # Example
//!
//! ```
//! use tree_db_core::{TreeRecord, validate_identifier};
//!
//! let fields = vec![
//!     "42".to_string(),
//!     "DPW Maintained".to_string(),
//!     "Monterey Pine".to_string(),
//!     "1234 Market St".to_string(),
//! ];
//! let record = TreeRecord::from_fields(1, &fields).unwrap();
//! assert_eq!(record.id, 42);
//!
//! assert!(validate_identifier("trees").is_ok());
//! assert!(validate_identifier("trees; DROP TABLE trees").is_err());
//! ```

mod ident;
mod record;

pub use ident::{InvalidIdentifier, validate_identifier};
pub use record::{RecordError, TreeRecord};
