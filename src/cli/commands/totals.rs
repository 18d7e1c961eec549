use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{seleccionar, SortKey, totals};
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { filter } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_all(&mut pool)?;

        let f = build_filter(filter)?;
        let seleccion = seleccionar(&records, &f, SortKey::Creacion);
        let t = totals(seleccion.iter().copied());

        println!("Registros:   {}", t.registros);
        println!("Solicitado:  {} €", t.solicitado);
        println!("Otorgado:    {} €", t.otorgado);
        println!("Abonado:     {} €", t.abonado);
        println!("Pendiente:   {} €", t.pendiente);
    }

    Ok(())
}
