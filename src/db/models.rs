//! Row ↔ record mapping for the `subvenciones` table.
//!
//! The store only guarantees native types, not domain semantics, so the
//! store→record direction pushes every text/date/phase column back
//! through the normalizers. That is deliberate: a date note stored as
//! "2023-12-07 FIARE 1720" re-parses to the same Fecha, and a phase
//! marker column round-trips through the same active/inactive logic the
//! import used.

use crate::grid::Cell;
use crate::models::{Fases, Fecha, Importe, Subvencion};
use crate::normalize::{parse_fase, parse_fecha, parse_texto};
use rusqlite::{Result, Row};

fn texto(row: &Row, col: &str) -> Result<Option<String>> {
    let s: String = row.get(col)?;
    Ok(parse_texto(&Cell::from_raw(&s)))
}

fn fecha(row: &Row, col: &str) -> Result<Option<Fecha>> {
    let s: String = row.get(col)?;
    Ok(parse_fecha(&Cell::from_raw(&s)).0)
}

fn importe(row: &Row, col: &str) -> Result<Importe> {
    let cents: i64 = row.get(col)?;
    Ok(Importe::from_cents(cents))
}

pub fn map_row(row: &Row) -> Result<Subvencion> {
    let mut fases = Fases::default();
    for (i, slot) in fases.0.iter_mut().enumerate() {
        let s: String = row.get(format!("fase_{}", i + 1).as_str())?;
        *slot = parse_fase(&Cell::from_raw(&s));
    }

    Ok(Subvencion {
        id: row.get("id")?,
        nombre: row.get("nombre")?,
        organismo: texto(row, "organismo")?,
        convocatoria: texto(row, "convocatoria")?,
        programa: texto(row, "programa")?,
        proyecto: texto(row, "proyecto")?,
        codigo: texto(row, "codigo")?,
        expediente: texto(row, "expediente")?,
        modalidad: texto(row, "modalidad")?,
        anyo_otorgamiento: texto(row, "anyo_otorgamiento")?,
        estado: texto(row, "estado")?,
        responsable: texto(row, "responsable")?,
        fecha_presentacion: fecha(row, "fecha_presentacion")?,
        fecha_resolucion: fecha(row, "fecha_resolucion")?,
        fecha_aceptacion: fecha(row, "fecha_aceptacion")?,
        fecha_inicio: fecha(row, "fecha_inicio")?,
        fecha_fin: fecha(row, "fecha_fin")?,
        fecha_justificacion: fecha(row, "fecha_justificacion")?,
        importe_solicitado: importe(row, "importe_solicitado")?,
        importe_otorgado: importe(row, "importe_otorgado")?,
        importe_presupuesto: importe(row, "importe_presupuesto")?,
        primer_abono: importe(row, "primer_abono")?,
        fecha_primer_abono: fecha(row, "fecha_primer_abono")?,
        segundo_abono: importe(row, "segundo_abono")?,
        fecha_segundo_abono: fecha(row, "fecha_segundo_abono")?,
        gastos_justificados: importe(row, "gastos_justificados")?,
        cuenta_abono: texto(row, "cuenta_abono")?,
        fases,
        observaciones: texto(row, "observaciones")?,
        notas: texto(row, "notas")?,
        created_at: row.get("created_at")?,
    })
}

/// Flat storage form of an optional text field.
pub fn texto_col(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

/// Flat storage form of an optional date (ISO + note).
pub fn fecha_col(v: &Option<Fecha>) -> String {
    v.as_ref().map(Fecha::as_celda).unwrap_or_default()
}
