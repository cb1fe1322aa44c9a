//! SQL schema generation for the tree table.
//!
//! Generates the `CREATE TABLE` and `DROP TABLE` statements for a single
//! tree table. The table name is the only dynamic part of either
//! statement and must pass [`validate_identifier`] before it is formatted
//! in; everything else is fixed.
//!
//! # Table structure
//!
//! One table, four columns:
//!
//! - `id` — INTEGER PRIMARY KEY, supplied by the source data
//! - `status` — TEXT, maintenance authority
//! - `species` — TEXT, taxonomic/common name
//! - `address` — TEXT, location string

use tree_db_core::validate_identifier;

use crate::error::Result;

/// Generates the `CREATE TABLE` statement for the given table name.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`](tree_db_core::InvalidIdentifier) if the
/// name fails the safe-identifier grammar.
pub fn generate_create_sql(table: &str) -> Result<String> {
    let table = validate_identifier(table)?;

    let sql = format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY,
    status TEXT,
    species TEXT,
    address TEXT
)
"#
    );

    Ok(sql)
}

/// Generates the `DROP TABLE IF EXISTS` statement for the given table name.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`](tree_db_core::InvalidIdentifier) if the
/// name fails the safe-identifier grammar.
pub fn generate_drop_sql(table: &str) -> Result<String> {
    let table = validate_identifier(table)?;
    Ok(format!("DROP TABLE IF EXISTS {table}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sql_contains_all_columns() {
        let sql = generate_create_sql("trees").unwrap();
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS trees"));
        assert!(sql.contains("id INTEGER PRIMARY KEY"));
        assert!(sql.contains("status TEXT"));
        assert!(sql.contains("species TEXT"));
        assert!(sql.contains("address TEXT"));
    }

    #[test]
    fn test_drop_sql_names_table() {
        let sql = generate_drop_sql("trees").unwrap();
        assert_eq!(sql, "DROP TABLE IF EXISTS trees");
    }

    #[test]
    fn test_invalid_table_name_rejected() {
        assert!(generate_create_sql("").is_err());
        assert!(generate_create_sql("trees; --").is_err());
        assert!(generate_drop_sql("drop table").is_err());
    }

    #[test]
    fn test_create_sql_executes() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(&generate_create_sql("t_").unwrap()).unwrap();

        conn.execute(
            "INSERT INTO t_ (id, status, species, address) VALUES (1, 'Good', 'Oak', '1 A St')",
            [],
        )
        .unwrap();
        let count: i64 = conn
            .prepare("SELECT COUNT(*) FROM t_")
            .unwrap()
            .query_row([], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        conn.execute_batch(&generate_drop_sql("t_").unwrap()).unwrap();
    }
}
