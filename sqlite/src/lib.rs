//! SQLite storage manager for the tree database.
//!
//! This crate owns the single tree table: its lifecycle (reset,
//! delete-all, status), transaction-scoped bulk loading, and a
//! parameterized substring query over any validated column.
//!
//! Two rules govern every statement this crate builds:
//!
//! - **Identifiers are validated, then interpolated.** Table and column
//!   names cannot go through parameter binding, so each one must pass the
//!   allow-list grammar in [`tree_db_core::validate_identifier`] before
//!   it reaches statement text. The table name is checked once at
//!   [`TreeStore`] construction; column names are checked on every query.
//! - **Data values are always bound.** Keywords and record fields travel
//!   as parameters, never as statement text.
//!
//! # Quick start
//!
//! ```no_run
//! use tree_db_sqlite::TreeStore;
//!
//! let store = TreeStore::new("trees.db", "trees").unwrap();
//!
//! // Full replace: reset + parse + single-transaction insert
//! let rows: Vec<Vec<String>> = vec![
//!     vec!["1".into(), "Good".into(), "Oak".into(), "1 A St".into()],
//!     vec!["2".into(), "Good".into(), "Monterey Pine".into(), "2 B St".into()],
//! ];
//! assert_eq!(store.bulk_insert(&rows).unwrap(), 2);
//!
//! // Case-sensitive substring match, keyword bound as a parameter
//! let pines = store.query_by_pattern("species", "Pine").unwrap();
//! assert_eq!(pines.len(), 1);
//!
//! store.delete_all().unwrap();
//! ```

mod error;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use schema::{generate_create_sql, generate_drop_sql};
pub use store::{StoreStatus, TreeStore};
