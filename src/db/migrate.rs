use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `subvenciones` table exists.
fn subvenciones_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='subvenciones'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `subvenciones` table with the current schema.
///
/// Text and date columns are TEXT (dates re-normalize on load, which is
/// how date notes survive the round trip), amounts are INTEGER cents,
/// phase columns hold the raw marker ('' / 'X' / annotation). The CHECK
/// constraints encode the domain rule that amounts are never negative.
fn create_subvenciones_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subvenciones (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre                TEXT NOT NULL,
            organismo             TEXT NOT NULL DEFAULT '',
            convocatoria          TEXT NOT NULL DEFAULT '',
            programa              TEXT NOT NULL DEFAULT '',
            proyecto              TEXT NOT NULL DEFAULT '',
            codigo                TEXT NOT NULL DEFAULT '',
            expediente            TEXT NOT NULL DEFAULT '',
            modalidad             TEXT NOT NULL DEFAULT '',
            anyo_otorgamiento     TEXT NOT NULL DEFAULT '',
            estado                TEXT NOT NULL DEFAULT '',
            responsable           TEXT NOT NULL DEFAULT '',
            fecha_presentacion    TEXT NOT NULL DEFAULT '',
            fecha_resolucion      TEXT NOT NULL DEFAULT '',
            fecha_aceptacion      TEXT NOT NULL DEFAULT '',
            fecha_inicio          TEXT NOT NULL DEFAULT '',
            fecha_fin             TEXT NOT NULL DEFAULT '',
            fecha_justificacion   TEXT NOT NULL DEFAULT '',
            importe_solicitado    INTEGER NOT NULL DEFAULT 0 CHECK(importe_solicitado >= 0),
            importe_otorgado      INTEGER NOT NULL DEFAULT 0 CHECK(importe_otorgado >= 0),
            importe_presupuesto   INTEGER NOT NULL DEFAULT 0 CHECK(importe_presupuesto >= 0),
            primer_abono          INTEGER NOT NULL DEFAULT 0 CHECK(primer_abono >= 0),
            fecha_primer_abono    TEXT NOT NULL DEFAULT '',
            segundo_abono         INTEGER NOT NULL DEFAULT 0 CHECK(segundo_abono >= 0),
            fecha_segundo_abono   TEXT NOT NULL DEFAULT '',
            gastos_justificados   INTEGER NOT NULL DEFAULT 0 CHECK(gastos_justificados >= 0),
            cuenta_abono          TEXT NOT NULL DEFAULT '',
            fase_1                TEXT NOT NULL DEFAULT '',
            fase_2                TEXT NOT NULL DEFAULT '',
            fase_3                TEXT NOT NULL DEFAULT '',
            fase_4                TEXT NOT NULL DEFAULT '',
            fase_5                TEXT NOT NULL DEFAULT '',
            fase_6                TEXT NOT NULL DEFAULT '',
            fase_7                TEXT NOT NULL DEFAULT '',
            fase_8                TEXT NOT NULL DEFAULT '',
            observaciones         TEXT NOT NULL DEFAULT '',
            notas                 TEXT NOT NULL DEFAULT '',
            created_at            TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_subvenciones_nombre ON subvenciones(nombre);
        CREATE INDEX IF NOT EXISTS idx_subvenciones_estado ON subvenciones(estado);
        CREATE INDEX IF NOT EXISTS idx_subvenciones_anyo ON subvenciones(anyo_otorgamiento);
        "#,
    )?;
    Ok(())
}

/// Check if the `subvenciones` table has a given column.
fn has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('subvenciones')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before 0.3.0 lack the free-form `notas` column.
fn migrate_add_notas_column(conn: &Connection) -> Result<()> {
    let version = "20250530_0001_add_notas";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    if !has_column(conn, "notas")? {
        conn.execute(
            "ALTER TABLE subvenciones ADD COLUMN notas TEXT NOT NULL DEFAULT '';",
            [],
        )?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notas column to subvenciones')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notas' to subvenciones table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the subvenciones table
    if !subvenciones_table_exists(conn)? {
        create_subvenciones_table(conn)?;
    } else {
        migrate_add_notas_column(conn)?;
    }

    Ok(())
}
