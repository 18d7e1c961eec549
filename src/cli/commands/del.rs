use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all, delete_subvencion};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        let prompt = match (id, all) {
            (Some(n), _) => format!("Delete record #{}? This action is irreversible.", n),
            (None, true) => "Delete ALL records? This action is irreversible.".to_string(),
            (None, false) => {
                return Err(AppError::Other("nothing to delete: pass --id or --all".into()));
            }
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        match id {
            Some(n) => {
                let removed = delete_subvencion(&pool.conn, *n)?;
                if removed == 0 {
                    warning(format!("No record with id {}.", n));
                } else {
                    let _ = ttlog(&pool.conn, "del", &n.to_string(), "record deleted");
                    success(format!("Record #{} deleted.", n));
                }
            }
            None => {
                let removed = delete_all(&pool.conn)?;
                let _ = ttlog(
                    &pool.conn,
                    "del",
                    "subvenciones",
                    &format!("deleted all ({} records)", removed),
                );
                success(format!("All records deleted ({}).", removed));
            }
        }
    }

    Ok(())
}
