use crate::db::models::{fecha_col, map_row, texto_col};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Subvencion;
use rusqlite::{Connection, params};

/// Load the full record set in creation (rowid) order.
pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<Subvencion>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM subvenciones ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_subvencion(conn: &Connection, s: &Subvencion) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO subvenciones (
            nombre, organismo, convocatoria, programa, proyecto, codigo,
            expediente, modalidad, anyo_otorgamiento, estado, responsable,
            fecha_presentacion, fecha_resolucion, fecha_aceptacion,
            fecha_inicio, fecha_fin, fecha_justificacion,
            importe_solicitado, importe_otorgado, importe_presupuesto,
            primer_abono, fecha_primer_abono, segundo_abono,
            fecha_segundo_abono, gastos_justificados, cuenta_abono,
            fase_1, fase_2, fase_3, fase_4, fase_5, fase_6, fase_7, fase_8,
            observaciones, notas, created_at
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
            ?12, ?13, ?14, ?15, ?16, ?17,
            ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26,
            ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34,
            ?35, ?36, ?37
        )",
        params![
            s.nombre,
            texto_col(&s.organismo),
            texto_col(&s.convocatoria),
            texto_col(&s.programa),
            texto_col(&s.proyecto),
            texto_col(&s.codigo),
            texto_col(&s.expediente),
            texto_col(&s.modalidad),
            texto_col(&s.anyo_otorgamiento),
            texto_col(&s.estado),
            texto_col(&s.responsable),
            fecha_col(&s.fecha_presentacion),
            fecha_col(&s.fecha_resolucion),
            fecha_col(&s.fecha_aceptacion),
            fecha_col(&s.fecha_inicio),
            fecha_col(&s.fecha_fin),
            fecha_col(&s.fecha_justificacion),
            s.importe_solicitado.cents(),
            s.importe_otorgado.cents(),
            s.importe_presupuesto.cents(),
            s.primer_abono.cents(),
            fecha_col(&s.fecha_primer_abono),
            s.segundo_abono.cents(),
            fecha_col(&s.fecha_segundo_abono),
            s.gastos_justificados.cents(),
            texto_col(&s.cuenta_abono),
            s.fases.0[0].marcador(),
            s.fases.0[1].marcador(),
            s.fases.0[2].marcador(),
            s.fases.0[3].marcador(),
            s.fases.0[4].marcador(),
            s.fases.0[5].marcador(),
            s.fases.0[6].marcador(),
            s.fases.0[7].marcador(),
            texto_col(&s.observaciones),
            texto_col(&s.notas),
            s.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a record (all fields except id).
pub fn update_subvencion(conn: &Connection, s: &Subvencion) -> AppResult<()> {
    conn.execute(
        "UPDATE subvenciones SET
            nombre = ?1, organismo = ?2, convocatoria = ?3, programa = ?4,
            proyecto = ?5, codigo = ?6, expediente = ?7, modalidad = ?8,
            anyo_otorgamiento = ?9, estado = ?10, responsable = ?11,
            fecha_presentacion = ?12, fecha_resolucion = ?13,
            fecha_aceptacion = ?14, fecha_inicio = ?15, fecha_fin = ?16,
            fecha_justificacion = ?17, importe_solicitado = ?18,
            importe_otorgado = ?19, importe_presupuesto = ?20,
            primer_abono = ?21, fecha_primer_abono = ?22,
            segundo_abono = ?23, fecha_segundo_abono = ?24,
            gastos_justificados = ?25, cuenta_abono = ?26,
            fase_1 = ?27, fase_2 = ?28, fase_3 = ?29, fase_4 = ?30,
            fase_5 = ?31, fase_6 = ?32, fase_7 = ?33, fase_8 = ?34,
            observaciones = ?35, notas = ?36
         WHERE id = ?37",
        params![
            s.nombre,
            texto_col(&s.organismo),
            texto_col(&s.convocatoria),
            texto_col(&s.programa),
            texto_col(&s.proyecto),
            texto_col(&s.codigo),
            texto_col(&s.expediente),
            texto_col(&s.modalidad),
            texto_col(&s.anyo_otorgamiento),
            texto_col(&s.estado),
            texto_col(&s.responsable),
            fecha_col(&s.fecha_presentacion),
            fecha_col(&s.fecha_resolucion),
            fecha_col(&s.fecha_aceptacion),
            fecha_col(&s.fecha_inicio),
            fecha_col(&s.fecha_fin),
            fecha_col(&s.fecha_justificacion),
            s.importe_solicitado.cents(),
            s.importe_otorgado.cents(),
            s.importe_presupuesto.cents(),
            s.primer_abono.cents(),
            fecha_col(&s.fecha_primer_abono),
            s.segundo_abono.cents(),
            fecha_col(&s.fecha_segundo_abono),
            s.gastos_justificados.cents(),
            texto_col(&s.cuenta_abono),
            s.fases.0[0].marcador(),
            s.fases.0[1].marcador(),
            s.fases.0[2].marcador(),
            s.fases.0[3].marcador(),
            s.fases.0[4].marcador(),
            s.fases.0[5].marcador(),
            s.fases.0[6].marcador(),
            s.fases.0[7].marcador(),
            texto_col(&s.observaciones),
            texto_col(&s.notas),
            s.id,
        ],
    )?;
    Ok(())
}

pub fn delete_subvencion(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM subvenciones WHERE id = ?1", params![id])?;
    Ok(n)
}

/// Wipe the whole record set. Returns how many rows were removed.
pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM subvenciones", [])?;
    Ok(n)
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM subvenciones", [], |row| row.get(0))?;
    Ok(n)
}
