use crate::cli::commands::{build_filter, sort_key};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::seleccionar;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, sort } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_all(&mut pool)?;

        let f = build_filter(filter)?;
        let seleccion = seleccionar(&records, &f, sort_key(*sort));

        if seleccion.is_empty() {
            info("No records match.");
            return Ok(());
        }

        let mut table = Table::new(&[
            "ID", "NOMBRE", "PROYECTO", "ESTADO", "AÑO", "OTORGADO", "ABONADO", "PENDIENTE",
            "FASES",
        ]);

        for s in &seleccion {
            table.add_row(vec![
                s.id.to_string(),
                s.nombre.clone(),
                s.proyecto.clone().unwrap_or_default(),
                s.estado.clone().unwrap_or_default(),
                s.anyo_otorgamiento.clone().unwrap_or_default(),
                s.importe_otorgado.to_string(),
                s.abonado().to_string(),
                s.pendiente().to_string(),
                format!("{}/8", s.fases.activas()),
            ]);
        }

        print!("{}", table.render());
        info(format!("{} records.", seleccion.len()));
    }

    Ok(())
}
