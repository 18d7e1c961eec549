use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::import_file;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::SheetLayout;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        dry_run,
        diagnostics,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let mut layout = SheetLayout::standard();
        // Config may move the header row when the sheet contract drifts.
        layout.header_row = cfg.header_row;

        let outcome = import_file(&mut pool, &layout, file, cfg.separator_byte(), *dry_run)?;

        info(format!(
            "Located {} columns, assembled {} records ({} discarded).",
            outcome.localizadas,
            outcome.ensambladas,
            outcome.descartadas.len()
        ));

        if *diagnostics {
            if outcome.diagnostics.is_empty() {
                info("No cells were defaulted or corrected.");
            } else {
                warning(format!(
                    "{} cells defaulted or corrected:",
                    outcome.diagnostics.len()
                ));
                for d in &outcome.diagnostics {
                    println!("  {}", d);
                }
            }
        }

        match outcome.report {
            Some(r) => {
                if r.errors == 0 {
                    success(format!("Import complete: {} records created.", r.created));
                } else {
                    warning(format!(
                        "Import complete: {} records created, {} errors (see log).",
                        r.created, r.errors
                    ));
                }
            }
            None => info("Dry run: database untouched."),
        }
    }

    Ok(())
}
