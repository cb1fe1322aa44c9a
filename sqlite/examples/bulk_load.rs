//! Basic store lifecycle example.
//!
//! Demonstrates the full replace-load / query / delete cycle of a
//! [`TreeStore`] against a throwaway database file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tree-db-sqlite --example bulk_load
//! ```

use tree_db_sqlite::TreeStore;

fn main() {
    let db = std::env::temp_dir().join(format!("tree_db_example_{}.db", std::process::id()));
    let store = TreeStore::new(&db, "trees").expect("table name is a safe identifier");

    // A bulk load is a full replace: the table is reset, every row is
    // parsed, and the batch lands in one transaction.
    let rows: Vec<Vec<String>> = vec![
        vec!["1".into(), "DPW Maintained".into(), "Monterey Pine".into(), "501 Main St".into()],
        vec!["2".into(), "Private".into(), "Coast Live Oak".into(), "9 Elm Ave".into()],
        vec!["3".into(), "DPW Maintained".into(), "Ginkgo".into(), "12 Market St".into()],
    ];
    let inserted = store.bulk_insert(&rows).expect("bulk load failed");
    println!("Loaded {inserted} row(s)");

    // Substring match, case-sensitive, keyword bound as a parameter.
    let pines = store.query_by_pattern("species", "Pine").expect("query failed");
    println!("\nSpecies containing 'Pine' ({}):", pines.len());
    for record in &pines {
        println!("  #{} {} at {}", record.id, record.species, record.address);
    }

    let maintained = store.query_by_pattern("status", "DPW").expect("query failed");
    println!("\nDPW-maintained trees: {}", maintained.len());

    let deleted = store.delete_all().expect("delete failed");
    println!("\nDeleted {deleted} row(s)");

    let status = store.status().expect("status failed");
    println!(
        "Table exists: {}, rows: {}",
        status.table_exists, status.row_count
    );

    let _ = std::fs::remove_file(&db);
}
