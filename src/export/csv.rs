use crate::errors::AppResult;
use crate::models::Subvencion;
use csv::Writer;

const HEADERS: [&str; 37] = [
    "id",
    "nombre",
    "organismo",
    "convocatoria",
    "programa",
    "proyecto",
    "codigo",
    "expediente",
    "modalidad",
    "anyo_otorgamiento",
    "estado",
    "responsable",
    "fecha_presentacion",
    "fecha_resolucion",
    "fecha_aceptacion",
    "fecha_inicio",
    "fecha_fin",
    "fecha_justificacion",
    "importe_solicitado",
    "importe_otorgado",
    "importe_presupuesto",
    "primer_abono",
    "fecha_primer_abono",
    "segundo_abono",
    "fecha_segundo_abono",
    "gastos_justificados",
    "cuenta_abono",
    "fase_1",
    "fase_2",
    "fase_3",
    "fase_4",
    "fase_5",
    "fase_6",
    "fase_7",
    "fase_8",
    "observaciones",
    "notas",
];

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn fecha(v: &Option<crate::models::Fecha>) -> String {
    v.as_ref().map(|f| f.as_celda()).unwrap_or_default()
}

/// Write the record set as a flat sheet, one row per record. This is a
/// pure projection: values go out exactly as the canonical forms render,
/// no further normalization.
pub fn write_csv(path: &str, records: &[&Subvencion]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for s in records {
        let mut row: Vec<String> = vec![
            s.id.to_string(),
            s.nombre.clone(),
            opt(&s.organismo),
            opt(&s.convocatoria),
            opt(&s.programa),
            opt(&s.proyecto),
            opt(&s.codigo),
            opt(&s.expediente),
            opt(&s.modalidad),
            opt(&s.anyo_otorgamiento),
            opt(&s.estado),
            opt(&s.responsable),
            fecha(&s.fecha_presentacion),
            fecha(&s.fecha_resolucion),
            fecha(&s.fecha_aceptacion),
            fecha(&s.fecha_inicio),
            fecha(&s.fecha_fin),
            fecha(&s.fecha_justificacion),
            s.importe_solicitado.to_string(),
            s.importe_otorgado.to_string(),
            s.importe_presupuesto.to_string(),
            s.primer_abono.to_string(),
            fecha(&s.fecha_primer_abono),
            s.segundo_abono.to_string(),
            fecha(&s.fecha_segundo_abono),
            s.gastos_justificados.to_string(),
            opt(&s.cuenta_abono),
        ];
        for f in &s.fases.0 {
            row.push(f.marcador().to_string());
        }
        row.push(opt(&s.observaciones));
        row.push(opt(&s.notas));

        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
