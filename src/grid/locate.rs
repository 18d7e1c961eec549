use super::{Cell, RawGrid};

/// One located record column: its offset in the grid rows plus the raw
/// display name found in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub col: usize,
    pub nombre: String,
}

/// A header cell holds a plausible record name when it is more than one
/// character and not one of the placeholder markers operators leave in
/// spare columns.
pub(crate) fn nombre_valido(t: &str) -> bool {
    !t.is_empty() && t != "." && t != "-" && t != "--" && t.chars().count() > 1
}

/// Scan the designated header row (0-based index) and return, in
/// left-to-right order, every column that holds a plausible record name.
///
/// Column 0 is reserved for row labels and always skipped. Never fails:
/// an all-empty header row yields an empty vector ("no records found").
pub fn locate_columns(grid: &RawGrid, header_row: usize) -> Vec<ColumnIndex> {
    let mut out = Vec::new();

    for col in 1..grid.row_len(header_row) {
        if let Cell::Text(s) = grid.cell(header_row, col) {
            let t = s.trim();
            if nombre_valido(t) {
                out.push(ColumnIndex {
                    col,
                    nombre: t.to_string(),
                });
            }
        }
    }

    out
}
