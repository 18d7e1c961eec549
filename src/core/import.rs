use crate::core::reconcile::{ReconcileReport, replace_all};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::grid::{locate_columns, read_grid};
use crate::import::{SheetLayout, assemble_records};
use crate::normalize::Diagnostic;
use crate::ui::messages::warning;

/// Everything one import run produced, for reporting to the operator.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Columns the locator accepted in the header row.
    pub localizadas: usize,
    /// Records that survived the assembler's post-filter.
    pub ensambladas: usize,
    /// Display names dropped by the post-filter.
    pub descartadas: Vec<String>,
    /// Cells defaulted or corrected during normalization.
    pub diagnostics: Vec<Diagnostic>,
    /// None on a dry run.
    pub report: Option<ReconcileReport>,
}

/// Run the full pipeline over one export file: grid → locate → assemble,
/// then (unless `dry_run`) reconcile against the store.
///
/// Grid parsing and assembly are synchronous and complete before any
/// record becomes visible; only the reconcile step touches the store.
pub fn import_file(
    pool: &mut DbPool,
    layout: &SheetLayout,
    path: &str,
    delimiter: u8,
    dry_run: bool,
) -> AppResult<ImportOutcome> {
    layout.validate()?;

    let grid = read_grid(path, delimiter)?;
    let columns = locate_columns(&grid, layout.header_row_index());
    let localizadas = columns.len();

    let outcome = assemble_records(&grid, &columns, layout);

    for nombre in &outcome.dropped {
        warning(format!("Discarded column '{}': placeholder name", nombre));
        let _ = ttlog(
            &pool.conn,
            "import",
            nombre,
            "column discarded: empty or placeholder name",
        );
    }

    let report = if dry_run {
        None
    } else {
        let r = replace_all(pool, &outcome.records)?;
        let _ = ttlog(
            &pool.conn,
            "import",
            path,
            &format!("created {} records, {} errors", r.created, r.errors),
        );
        Some(r)
    };

    Ok(ImportOutcome {
        localizadas,
        ensambladas: outcome.records.len(),
        descartadas: outcome.dropped,
        diagnostics: outcome.diagnostics,
        report,
    })
}
