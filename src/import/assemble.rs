use super::layout::{FieldKind, SheetLayout};
use crate::grid::{Cell, ColumnIndex, RawGrid};
use crate::models::{Fecha, Importe, Subvencion};
use crate::normalize::{Diagnostic, Motivo, parse_fase, parse_fecha, parse_importe, parse_texto};

/// Result of assembling one import's worth of records.
#[derive(Debug)]
pub struct AssembleOutcome {
    /// Records in source column order, every field populated (possibly
    /// with its default canonical value).
    pub records: Vec<Subvencion>,
    /// Display names dropped by the post-filter, for operator logging.
    pub dropped: Vec<String>,
    /// Cells that were defaulted or corrected during coercion.
    pub diagnostics: Vec<Diagnostic>,
}

/// Pull one raw value per layout field for each located column, coerce
/// it by the field's declared kind and build the typed records.
///
/// Records whose display name is a placeholder slip through the Column
/// Locator occasionally (a name that trims down to a marker); the
/// post-filter here is the authoritative gate.
pub fn assemble_records(
    grid: &RawGrid,
    columns: &[ColumnIndex],
    layout: &SheetLayout,
) -> AssembleOutcome {
    let mut records = Vec::new();
    let mut dropped = Vec::new();
    let mut diagnostics = Vec::new();

    for ci in columns {
        let nombre = ci.nombre.trim();
        if nombre.chars().count() <= 1 || nombre == "." || nombre == "-" {
            dropped.push(ci.nombre.clone());
            continue;
        }

        let mut rec = Subvencion::new(nombre);
        let mut fase_idx = 0;

        for f in &layout.fields {
            let cell = grid.cell(f.row - 1, ci.col);
            let motivo = match f.kind {
                FieldKind::Texto => {
                    asignar_texto(&mut rec, f.name, parse_texto(cell));
                    None
                }
                FieldKind::Fecha => {
                    let (v, m) = parse_fecha(cell);
                    asignar_fecha(&mut rec, f.name, v);
                    m
                }
                FieldKind::Importe => {
                    let (v, m) = parse_importe(cell);
                    asignar_importe(&mut rec, f.name, v);
                    m
                }
                FieldKind::Fase => {
                    // Phase fields fold into the Fases sub-structure in
                    // layout order.
                    if fase_idx < rec.fases.0.len() {
                        rec.fases.0[fase_idx] = parse_fase(cell);
                        fase_idx += 1;
                    }
                    None
                }
            };

            if let Some(m) = motivo {
                diagnostics.push(diagnostico(&ci.nombre, f.name, cell, m));
            }
        }

        records.push(rec);
    }

    AssembleOutcome {
        records,
        dropped,
        diagnostics,
    }
}

fn diagnostico(columna: &str, campo: &str, cell: &Cell, motivo: Motivo) -> Diagnostic {
    Diagnostic {
        columna: columna.to_string(),
        campo: campo.to_string(),
        crudo: cell.to_string(),
        motivo,
    }
}

fn asignar_texto(rec: &mut Subvencion, campo: &str, v: Option<String>) {
    match campo {
        "organismo" => rec.organismo = v,
        "convocatoria" => rec.convocatoria = v,
        "programa" => rec.programa = v,
        "proyecto" => rec.proyecto = v,
        "codigo" => rec.codigo = v,
        "expediente" => rec.expediente = v,
        "modalidad" => rec.modalidad = v,
        "anyo_otorgamiento" => rec.anyo_otorgamiento = v,
        "estado" => rec.estado = v,
        "responsable" => rec.responsable = v,
        "cuenta_abono" => rec.cuenta_abono = v,
        "observaciones" => rec.observaciones = v,
        "notas" => rec.notas = v,
        _ => {}
    }
}

fn asignar_fecha(rec: &mut Subvencion, campo: &str, v: Option<Fecha>) {
    match campo {
        "fecha_presentacion" => rec.fecha_presentacion = v,
        "fecha_resolucion" => rec.fecha_resolucion = v,
        "fecha_aceptacion" => rec.fecha_aceptacion = v,
        "fecha_inicio" => rec.fecha_inicio = v,
        "fecha_fin" => rec.fecha_fin = v,
        "fecha_justificacion" => rec.fecha_justificacion = v,
        "fecha_primer_abono" => rec.fecha_primer_abono = v,
        "fecha_segundo_abono" => rec.fecha_segundo_abono = v,
        _ => {}
    }
}

fn asignar_importe(rec: &mut Subvencion, campo: &str, v: Importe) {
    match campo {
        "importe_solicitado" => rec.importe_solicitado = v,
        "importe_otorgado" => rec.importe_otorgado = v,
        "importe_presupuesto" => rec.importe_presupuesto = v,
        "primer_abono" => rec.primer_abono = v,
        "segundo_abono" => rec.segundo_abono = v,
        "gastos_justificados" => rec.gastos_justificados = v,
        _ => {}
    }
}
