//! CSV export loading
//!
//! Reads a headered CSV file into name-keyed text rows. File-level problems
//! are errors; defective rows are skipped with a warning so one bad line
//! does not reject a whole export.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use thiserror::Error;

/// One CSV data row, keyed by header name.
pub type RawRow = HashMap<String, String>;

/// Load error types
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Read a headered CSV file into raw rows, preserving file order.
///
/// Header names are kept as-is apart from trimming and stripping a UTF-8
/// BOM, which Excel-produced exports often carry on the first column.
pub fn read_rows(path: &Path) -> LoadResult<Vec<RawRow>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header line, and CSV lines are 1-based
        let line = idx + 2;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping unreadable row at line {}: {}", line, e);
                continue;
            }
        };

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
