//! CSV row source for the tree database bulk loader.
//!
//! Reads tabular records from a CSV export and hands them to the storage
//! layer as raw text rows. The header row is discarded here; field-count
//! enforcement is deliberately not — a short row must reject the whole
//! batch at insert time, not be silently skipped at read time, so rows
//! pass through unvalidated.
//!
//! # Example
//!
//! ```no_run
//! use tree_db_csv::read_rows;
//!
//! let rows = read_rows("Street_Tree_List.csv").unwrap();
//! println!("{} data rows", rows.len());
//! ```

mod error;
mod reader;

pub use error::{CsvError, Result};
pub use reader::{read_rows, read_rows_from_reader};
