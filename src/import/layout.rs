use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

/// Declared kind of one sheet field; selects the coercion applied to
/// its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Texto,
    Fecha,
    Importe,
    Fase,
}

/// One field of the sheet contract: name, 1-indexed sheet row, kind.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub row: usize,
    pub kind: FieldKind,
}

const fn campo(name: &'static str, row: usize, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, row, kind }
}

/// The field→row map of the source sheet as an explicit, versioned
/// structure, so schema drift in the export is a configuration change
/// rather than a code change. Rows are 1-indexed as in the sheet
/// contract; rows not listed are separators and are never read.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub version: u32,
    /// 1-indexed row whose cells hold the record display names.
    pub header_row: usize,
    pub fields: Vec<FieldSpec>,
}

impl SheetLayout {
    /// The current sheet contract: header on row 8, 35 fields between
    /// rows 9 and 51, the 8 phase rows contiguous at 40–47.
    pub fn standard() -> Self {
        use FieldKind::{Fase, Fecha, Importe, Texto};

        SheetLayout {
            version: 1,
            header_row: 8,
            fields: vec![
                campo("organismo", 9, Texto),
                campo("convocatoria", 10, Texto),
                campo("programa", 11, Texto),
                campo("proyecto", 12, Texto),
                campo("codigo", 13, Texto),
                campo("expediente", 14, Texto),
                campo("modalidad", 15, Texto),
                campo("anyo_otorgamiento", 16, Texto),
                campo("estado", 17, Texto),
                campo("responsable", 18, Texto),
                campo("fecha_presentacion", 20, Fecha),
                campo("fecha_resolucion", 21, Fecha),
                campo("fecha_aceptacion", 22, Fecha),
                campo("fecha_inicio", 23, Fecha),
                campo("fecha_fin", 24, Fecha),
                campo("fecha_justificacion", 25, Fecha),
                campo("importe_solicitado", 27, Importe),
                campo("importe_otorgado", 28, Importe),
                campo("importe_presupuesto", 29, Importe),
                campo("primer_abono", 31, Importe),
                campo("fecha_primer_abono", 32, Fecha),
                campo("segundo_abono", 33, Importe),
                campo("fecha_segundo_abono", 34, Fecha),
                campo("gastos_justificados", 35, Importe),
                campo("cuenta_abono", 36, Texto),
                campo("fase_solicitud", 40, Fase),
                campo("fase_resolucion", 41, Fase),
                campo("fase_aceptacion", 42, Fase),
                campo("fase_primer_abono", 43, Fase),
                campo("fase_justificacion_parcial", 44, Fase),
                campo("fase_segundo_abono", 45, Fase),
                campo("fase_justificacion_final", 46, Fase),
                campo("fase_cierre", 47, Fase),
                campo("observaciones", 50, Texto),
                campo("notas", 51, Texto),
            ],
        }
    }

    pub fn header_row_index(&self) -> usize {
        self.header_row - 1
    }

    /// Structural sanity of the layout: no duplicate names or rows, rows
    /// below the header row, exactly 8 phase fields.
    pub fn validate(&self) -> AppResult<()> {
        if self.header_row == 0 {
            return Err(AppError::Layout("header_row must be 1-indexed".into()));
        }

        let mut names = HashSet::new();
        let mut rows = HashSet::new();
        for f in &self.fields {
            if !names.insert(f.name) {
                return Err(AppError::Layout(format!("duplicate field '{}'", f.name)));
            }
            if !rows.insert(f.row) {
                return Err(AppError::Layout(format!(
                    "row {} mapped twice (field '{}')",
                    f.row, f.name
                )));
            }
            if f.row <= self.header_row {
                return Err(AppError::Layout(format!(
                    "field '{}' at row {} is not below the header row",
                    f.name, f.row
                )));
            }
        }

        let fases = self
            .fields
            .iter()
            .filter(|f| f.kind == FieldKind::Fase)
            .count();
        if fases != 8 {
            return Err(AppError::Layout(format!(
                "expected 8 phase fields, layout has {}",
                fases
            )));
        }

        Ok(())
    }
}
