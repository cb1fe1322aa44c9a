//! The tree store: lifecycle, bulk loading, and pattern queries.
//!
//! [`TreeStore`] owns a database path and a validated table name, not a
//! live connection. Every operation opens its own connection, performs
//! one unit of work, and drops the connection on every exit path, so
//! independent processes may interleave operations under SQLite's own
//! locking. Mutations are transaction-scoped: a reset or a bulk load
//! either lands completely or not at all.
//!
//! # Example
//!
//! ```no_run
//! use tree_db_sqlite::TreeStore;
//!
//! let store = TreeStore::new("trees.db", "trees").unwrap();
//! store.reset().unwrap();
//!
//! let rows = vec![vec![
//!     "1".to_string(),
//!     "Good".to_string(),
//!     "Monterey Pine".to_string(),
//!     "1 Main St".to_string(),
//! ]];
//! let inserted = store.bulk_insert(&rows).unwrap();
//! assert_eq!(inserted, 1);
//!
//! let pines = store.query_by_pattern("species", "Pine").unwrap();
//! assert_eq!(pines.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tree_db_core::{TreeRecord, validate_identifier};

use crate::error::Result;
use crate::schema::{generate_create_sql, generate_drop_sql};

/// Storage manager for a single tree table in a SQLite file.
///
/// The table name is validated once at construction and cached; column
/// names are validated on every query. Data values are always bound as
/// parameters and never reach statement text.
#[derive(Debug, Clone)]
pub struct TreeStore {
    path: PathBuf,
    table: String,
}

impl TreeStore {
    /// Creates a store bound to a database file and table name.
    ///
    /// Opens no connection; the file is created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`](tree_db_core::InvalidIdentifier) if
    /// the table name fails the safe-identifier grammar.
    pub fn new(path: impl Into<PathBuf>, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_identifier(&table)?;
        Ok(Self {
            path: path.into(),
            table,
        })
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the validated table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Opens a connection for one operation.
    ///
    /// `LIKE` is case-insensitive for ASCII by default; pattern queries
    /// here are case-sensitive, so every connection sets the pragma.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA case_sensitive_like = ON;")?;
        Ok(conn)
    }

    /// Drops the table if it exists and recreates it empty.
    ///
    /// Both statements run inside one transaction, so the table is never
    /// observable half-reset. Safe to call on a missing table and safe to
    /// call twice; afterwards the table exists, is empty, and has the
    /// fixed four-column schema regardless of prior state.
    pub fn reset(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute_batch(&generate_drop_sql(&self.table)?)?;
        tx.execute_batch(&generate_create_sql(&self.table)?)?;
        tx.commit()?;
        Ok(())
    }

    /// Replaces the table contents with the given batch of raw rows.
    ///
    /// Loading is a full replace, never an append: the table is
    /// [`reset`](Self::reset) first, then every row is parsed, then all
    /// records are inserted through one prepared statement in a single
    /// transaction. Returns the number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRow`](crate::StoreError::MalformedRow) if any
    /// row has fewer than four fields or a non-integer id, or
    /// [`Storage`](crate::StoreError::Storage) on engine failure. On any
    /// error the table is left in the post-reset state: empty, correct
    /// schema, no partial prefix of the batch.
    pub fn bulk_insert(&self, rows: &[Vec<String>]) -> Result<usize> {
        self.reset()?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, fields) in rows.iter().enumerate() {
            records.push(TreeRecord::from_fields(i + 1, fields)?);
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (id, status, species, address) VALUES (?1, ?2, ?3, ?4)",
                self.table
            ))?;
            for record in &records {
                stmt.execute(params![
                    record.id,
                    record.status,
                    record.species,
                    record.address
                ])?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    /// Deletes every row without dropping the schema.
    ///
    /// Returns the number of rows removed; zero on an already-empty
    /// table is a normal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Storage`](crate::StoreError::Storage) if the file cannot
    /// be opened or the table does not exist.
    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.connect()?;
        let deleted = conn.execute(&format!("DELETE FROM {}", self.table), [])?;
        Ok(deleted)
    }

    /// Returns all rows whose `column` value contains `keyword` as a
    /// case-sensitive substring.
    ///
    /// The column name is validated on every call, even from call sites
    /// that only ever pass fixed names; the keyword is bound as a
    /// parameter and never concatenated into the statement. Rows come
    /// back in the engine's natural order, and no match is an empty
    /// vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`](tree_db_core::InvalidIdentifier) if
    /// the column name fails the grammar, or
    /// [`Storage`](crate::StoreError::Storage) if the file cannot be
    /// opened or the table does not exist.
    pub fn query_by_pattern(&self, column: &str, keyword: &str) -> Result<Vec<TreeRecord>> {
        let column = validate_identifier(column)?;

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, status, species, address FROM {} WHERE {} LIKE ?1",
            self.table, column
        ))?;

        let pattern = format!("%{keyword}%");
        let rows = stmt.query_map(params![pattern], |row| {
            Ok(TreeRecord {
                id: row.get(0)?,
                status: row.get(1)?,
                species: row.get(2)?,
                address: row.get(3)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Reports whether the table exists and how many rows it holds.
    pub fn status(&self) -> Result<StoreStatus> {
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1")?;
        let exists: i64 = stmt.query_row([&self.table], |row| row.get(0))?;
        if exists == 0 {
            return Ok(StoreStatus {
                table_exists: false,
                row_count: 0,
            });
        }

        let mut stmt = conn.prepare(&format!("SELECT COUNT(*) FROM {}", self.table))?;
        let count: i64 = stmt.query_row([], |row| row.get(0))?;
        Ok(StoreStatus {
            table_exists: true,
            row_count: count as usize,
        })
    }
}

/// Snapshot of the managed table's state.
///
/// Returned by [`TreeStore::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    /// Whether the table exists in the database file.
    pub table_exists: bool,
    /// Number of rows currently stored.
    pub row_count: usize,
}
