use super::{Cell, RawGrid};
use crate::errors::AppResult;
use std::path::Path;

/// Read a delimited text file into a RawGrid.
///
/// `has_headers` is off because the sheet's header row is a data row for
/// us (the Column Locator scans it); `flexible` because hand-maintained
/// exports routinely have ragged row lengths.
pub fn read_grid<P: AsRef<Path>>(path: P, delimiter: u8) -> AppResult<RawGrid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;

        // The csv reader skips fully blank lines (no delimiters at all),
        // which would shift every later row off the fixed row contract.
        // Records carry their source line, so pad the gap with empty
        // rows to keep row indices absolute.
        if let Some(pos) = record.position() {
            let line = pos.line() as usize;
            while rows.len() + 1 < line {
                rows.push(Vec::new());
            }
        }

        rows.push(record.iter().map(Cell::from_raw).collect());
    }

    Ok(RawGrid::new(rows))
}
