//! Cell normalization: total coercion functions from raw sheet cells to
//! canonical values. None of them ever fail — unparsable content resolves
//! to a safe default and the reason is reported through the returned
//! `Motivo`, so callers who want stricter validation can collect a
//! diagnostic trail instead of silently losing information.

pub mod fase;
pub mod fecha;
pub mod importe;
pub mod texto;

pub use fase::parse_fase;
pub use fecha::parse_fecha;
pub use importe::parse_importe;
pub use texto::parse_texto;

use std::fmt;

/// Why a non-empty cell was defaulted (or corrected) during coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivo {
    /// The cell held descriptive prose (PENDIENTE, POR DEFINIR, ...)
    /// rather than a value.
    Descriptivo,
    /// The cell held something no pattern could make sense of.
    Ilegible,
    /// A native number looked like the known decimal-misalignment export
    /// artifact and was reconstituted (37.70428 → 37704.28). Always
    /// reported, never applied silently.
    AjusteDecimal,
}

impl fmt::Display for Motivo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Motivo::Descriptivo => "texto descriptivo",
            Motivo::Ilegible => "ilegible",
            Motivo::AjusteDecimal => "ajuste decimal",
        };
        write!(f, "{}", s)
    }
}

/// One defaulted/corrected cell, tied back to its record column and field
/// for operator review.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub columna: String,
    pub campo: String,
    pub crudo: String,
    pub motivo: Motivo,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: \"{}\" ({})",
            self.columna, self.campo, self.crudo, self.motivo
        )
    }
}

/// Descriptive-text markers: cells containing any of these are prose,
/// not a value. Substring match on the upper-cased cell. Shared by the
/// currency and date normalizers.
pub(crate) const MARCADORES_DESCRIPTIVOS: [&str; 10] = [
    "PENDIENTE",
    "PENDING",
    "ESTIMADO",
    "ESTIMATED",
    "SIN FECHA",
    "POR DEFINIR",
    "POR GESTIONAR",
    "SALDO",
    "POR CIENTO",
    "SOLO",
];

pub(crate) fn contiene_marcador(t: &str) -> bool {
    let mayus = t.to_uppercase();
    MARCADORES_DESCRIPTIVOS.iter().any(|m| mayus.contains(m))
}
