//! Integration tests for the tree-db-csv crate.

use std::io::Write;

use tree_db_csv::read_rows;

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    path
}

#[test]
fn test_read_rows_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "trees.csv",
        "TreeID,qLegalStatus,qSpecies,qAddress\n\
         1,DPW Maintained,Monterey Pine,501 Main St\n\
         2,Private,Coast Live Oak,9 Elm Ave\n",
    );

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["1", "DPW Maintained", "Monterey Pine", "501 Main St"]);
    assert_eq!(rows[1], vec!["2", "Private", "Coast Live Oak", "9 Elm Ave"]);
}

#[test]
fn test_read_rows_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(read_rows(&missing).is_err());
}

#[test]
fn test_read_rows_preserves_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents = String::from("ID,Status,Species,Address\n");
    for i in (1..=50).rev() {
        contents.push_str(&format!("{i},Good,Oak,{i} Main St\n"));
    }
    let path = write_csv(&dir, "ordered.csv", &contents);

    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0][0], "50");
    assert_eq!(rows[49][0], "1");
}
