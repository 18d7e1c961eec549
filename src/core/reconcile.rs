use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Subvencion;
use crate::ui::messages::warning;

/// Outcome of one wholesale replace: how many records made it into the
/// store and how many inserts were skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    pub created: usize,
    pub errors: usize,
}

/// Replace the persisted record set with a freshly assembled one.
///
/// The source sheet is the single source of truth per import: all
/// existing rows are deleted unconditionally, then the new records are
/// inserted one at a time, one insert in flight. A failed insert is
/// counted and skipped — no transaction, no rollback of the delete.
/// Operators re-run imports and read the log rather than rely on
/// atomicity.
pub fn replace_all(pool: &mut DbPool, records: &[Subvencion]) -> AppResult<ReconcileReport> {
    match queries::delete_all(&pool.conn) {
        Ok(n) => {
            let _ = ttlog(
                &pool.conn,
                "reconcile",
                "subvenciones",
                &format!("deleted {} existing records", n),
            );
        }
        Err(e) => {
            warning(format!("Could not clear existing records: {}", e));
            let _ = ttlog(
                &pool.conn,
                "reconcile",
                "subvenciones",
                &format!("delete failed: {}", e),
            );
        }
    }

    let mut created = 0usize;
    let mut errors = 0usize;

    for rec in records {
        match queries::insert_subvencion(&pool.conn, rec) {
            Ok(_) => created += 1,
            Err(e) => {
                errors += 1;
                warning(format!("Skipped '{}': {}", rec.nombre, e));
                let _ = ttlog(
                    &pool.conn,
                    "reconcile",
                    &rec.nombre,
                    &format!("insert failed: {}", e),
                );
            }
        }
    }

    Ok(ReconcileReport { created, errors })
}
