use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::insert_subvencion;
use crate::errors::{AppError, AppResult};
use crate::grid::Cell;
use crate::grid::locate::nombre_valido;
use crate::models::Subvencion;
use crate::normalize::{parse_importe, parse_texto};
use crate::ui::messages::{success, warning};

/// Manual single-record insert: an ordinary single-row operation, outside
/// the reconciliation contract. Raw option values pass through the same
/// coercions the importer uses.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        nombre,
        proyecto,
        estado,
        anyo,
        modalidad,
        otorgado,
        solicitado,
    } = cmd
    {
        let limpio = nombre.trim();
        if !nombre_valido(limpio) {
            return Err(AppError::InvalidName(format!(
                "'{}' is empty or a placeholder",
                nombre
            )));
        }

        let mut rec = Subvencion::new(limpio);

        let texto = |v: &Option<String>| {
            v.as_deref()
                .and_then(|s| parse_texto(&Cell::from_raw(s)))
        };
        rec.proyecto = texto(proyecto);
        rec.estado = texto(estado);
        rec.anyo_otorgamiento = texto(anyo);
        rec.modalidad = texto(modalidad);

        if let Some(raw) = otorgado {
            let (v, motivo) = parse_importe(&Cell::from_raw(raw));
            if let Some(m) = motivo {
                warning(format!("otorgado \"{}\" defaulted to 0 ({})", raw, m));
            }
            rec.importe_otorgado = v;
        }
        if let Some(raw) = solicitado {
            let (v, motivo) = parse_importe(&Cell::from_raw(raw));
            if let Some(m) = motivo {
                warning(format!("solicitado \"{}\" defaulted to 0 ({})", raw, m));
            }
            rec.importe_solicitado = v;
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        let id = insert_subvencion(&pool.conn, &rec)?;

        success(format!("Record #{} '{}' created.", id, rec.nombre));
    }

    Ok(())
}
