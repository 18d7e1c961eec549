use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{SortKey, seleccionar};
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_all(&mut pool)?;

        let f = build_filter(filter)?;
        let seleccion = seleccionar(&records, &f, SortKey::Creacion);

        match format {
            ExportFormat::Csv => write_csv(file, &seleccion)?,
            ExportFormat::Json => write_json(file, &seleccion)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), Path::new(file));
    }

    Ok(())
}
