use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Calendar date extracted from a cell, plus any free text that followed
/// the date pattern in the same cell (typically a bank account label,
/// e.g. "07/12/2023 - FIARE 1720").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fecha {
    pub dia: NaiveDate,
    pub nota: Option<String>,
}

impl Fecha {
    pub fn with_nota(dia: NaiveDate, nota: Option<String>) -> Self {
        Fecha { dia, nota }
    }

    pub fn iso(&self) -> String {
        self.dia.format("%Y-%m-%d").to_string()
    }

    /// Flat cell representation: ISO date, then the note space-joined.
    /// Re-parsing this through the date normalizer yields the same value,
    /// which is what the store round-trip relies on.
    pub fn as_celda(&self) -> String {
        match &self.nota {
            Some(n) => format!("{} {}", self.iso(), n),
            None => self.iso(),
        }
    }
}

impl fmt::Display for Fecha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_celda())
    }
}

impl Serialize for Fecha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_celda())
    }
}
