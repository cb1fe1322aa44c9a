//! Reading raw rows from CSV sources.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Reads all data rows from a CSV file, discarding the header row.
///
/// Each returned row is the record's raw text fields in source order.
/// Rows of any length are passed through: the storage layer enforces the
/// four-field minimum so that a malformed row fails the batch instead of
/// being dropped here.
///
/// # Errors
///
/// Returns [`CsvError::Io`](crate::CsvError::Io) if the file cannot be
/// opened, or [`CsvError::Csv`](crate::CsvError::Csv) if a record cannot
/// be parsed.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let rows = read_rows_from_reader(file)?;
    debug!(rows = rows.len(), path = %path.display(), "read CSV rows");
    Ok(rows)
}

/// Reads all data rows from any CSV reader, discarding the header row.
///
/// Same contract as [`read_rows`], without touching the filesystem.
pub fn read_rows_from_reader(rdr: impl Read) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
