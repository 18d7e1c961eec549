pub mod locate;
pub mod reader;

pub use locate::{ColumnIndex, locate_columns};
pub use reader::read_grid;

use std::fmt;

/// One raw cell of the source sheet.
///
/// The CSV reader only produces `Empty` and `Text`; `Number` and `Bool`
/// show up on the store→record direction, where values arrive already
/// typed, and every normalizer accepts all four.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

const EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    pub fn from_raw(s: &str) -> Cell {
        if s.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// 2-D grid of raw cells, one import's worth of source data.
/// Immutable after construction; all access is total (out of range
/// reads yield `Empty`).
#[derive(Debug)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        RawGrid { rows }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of one row (0 when the row does not exist).
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map(Vec::len).unwrap_or(0)
    }
}
