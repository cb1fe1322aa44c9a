use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tree_db_core::TreeRecord;
use tree_db_sqlite::TreeStore;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tree-db")]
#[command(about = "Street tree inventory over a single SQLite table")]
struct Cli {
    /// Database file path.
    #[arg(long, default_value = "trees.db")]
    db: PathBuf,
    /// Table name.
    #[arg(long, default_value = "trees")]
    table: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replace the table contents with the rows of a CSV file.
    Load(LoadArgs),
    /// Find rows whose column contains a keyword.
    Query(QueryArgs),
    /// Delete every row, keeping the table.
    DeleteAll,
    /// Show whether the table exists and how many rows it holds.
    Status,
}

#[derive(Debug, Args)]
struct LoadArgs {
    /// CSV file with a header row and (id, status, species, address) as
    /// its first four columns.
    file: PathBuf,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Keyword to match as a case-sensitive substring.
    keyword: String,
    /// Column to search.
    #[arg(long, default_value = "species")]
    column: String,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let store = TreeStore::new(cli.db.as_path(), cli.table.as_str())
        .map_err(|e| e.to_string())?;

    match cli.command {
        Command::Load(args) => run_load(&store, args),
        Command::Query(args) => run_query(&store, args),
        Command::DeleteAll => run_delete_all(&store),
        Command::Status => run_status(&store),
    }
}

fn run_load(store: &TreeStore, args: LoadArgs) -> Result<(), String> {
    let rows = tree_db_csv::read_rows(&args.file)
        .map_err(|e| format!("Failed to read '{}': {e}", args.file.display()))?;
    let inserted = store
        .bulk_insert(&rows)
        .map_err(|e| format!("Load failed: {e}"))?;
    println!(
        "Loaded {inserted} row(s) into '{}' from '{}'.",
        store.table(),
        args.file.display()
    );
    Ok(())
}

fn run_query(store: &TreeStore, args: QueryArgs) -> Result<(), String> {
    let records = store
        .query_by_pattern(&args.column, &args.keyword)
        .map_err(|e| format!("Query failed: {e}"))?;

    match args.format {
        CliOutputFormat::Table => print!("{}", render_table(&records)),
        CliOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| format!("Failed to serialize results: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_delete_all(store: &TreeStore) -> Result<(), String> {
    let deleted = store
        .delete_all()
        .map_err(|e| format!("Delete failed: {e}"))?;
    println!("Deleted {deleted} row(s) from '{}'.", store.table());
    Ok(())
}

fn run_status(store: &TreeStore) -> Result<(), String> {
    let status = store
        .status()
        .map_err(|e| format!("Failed to read status: {e}"))?;
    println!("Status of '{}':", store.table());
    println!(
        "  Table exists: {}",
        if status.table_exists { "yes" } else { "no" }
    );
    println!("  Row count: {}", status.row_count);
    Ok(())
}

/// Renders query results as labeled record blocks.
fn render_table(records: &[TreeRecord]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "Found {} matching record(s).", records.len());
    for record in records {
        let _ = writeln!(out, "-------------------------------");
        let _ = writeln!(out, "ID:      {}", record.id);
        let _ = writeln!(out, "Status:  {}", record.status);
        let _ = writeln!(out, "Species: {}", record.species);
        let _ = writeln!(out, "Address: {}", record.address);
    }
    if !records.is_empty() {
        let _ = writeln!(out, "-------------------------------");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use tree_db_core::TreeRecord;

    #[test]
    fn test_render_table_empty() {
        let out = render_table(&[]);
        assert_eq!(out, "Found 0 matching record(s).\n");
    }

    #[test]
    fn test_render_table_lists_fields() {
        let records = vec![
            TreeRecord::new(1, "Good", "Monterey Pine", "1 Main St"),
            TreeRecord::new(2, "Poor", "Oak", "2 Main St"),
        ];
        let out = render_table(&records);
        assert!(out.starts_with("Found 2 matching record(s).\n"));
        assert!(out.contains("ID:      1"));
        assert!(out.contains("Species: Monterey Pine"));
        assert!(out.contains("Address: 2 Main St"));
        assert!(out.ends_with("-------------------------------\n"));
    }
}
