use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::FaseFilter;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, update_subvencion};
use crate::errors::{AppError, AppResult};
use crate::grid::Cell;
use crate::grid::locate::nombre_valido;
use crate::models::{FASE_LABELS, Fase, Fases};
use crate::normalize::{parse_importe, parse_texto};
use crate::ui::messages::{info, success, warning};

/// In-place edit of a stored record. Only the fields passed on the
/// command line are touched; raw option values go through the same
/// coercions the importer applies.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        nombre,
        proyecto,
        estado,
        anyo,
        modalidad,
        otorgado,
        solicitado,
        fase,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let mut rec = load_all(&mut pool)?
            .into_iter()
            .find(|s| s.id == *id)
            .ok_or_else(|| AppError::Other(format!("no record with id {}", id)))?;

        if let Some(n) = nombre {
            let limpio = n.trim();
            if !nombre_valido(limpio) {
                return Err(AppError::InvalidName(format!(
                    "'{}' is empty or a placeholder",
                    n
                )));
            }
            rec.nombre = limpio.to_string();
        }

        let texto = |v: &Option<String>| v.as_deref().map(|s| parse_texto(&Cell::from_raw(s)));
        if let Some(v) = texto(proyecto) {
            rec.proyecto = v;
        }
        if let Some(v) = texto(estado) {
            rec.estado = v;
        }
        if let Some(v) = texto(anyo) {
            rec.anyo_otorgamiento = v;
        }
        if let Some(v) = texto(modalidad) {
            rec.modalidad = v;
        }

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

        if let Some(s) = fase {
            match FaseFilter::parse(s)? {
                FaseFilter::Activa(n) => {
                    rec.fases.0[n - 1] = Fase::Activa;
                    info(format!("Phase {} ({}) marked as reached.", n, FASE_LABELS[n - 1]));
                }
                FaseFilter::Ninguna => {
                    rec.fases = Fases::default();
                    info("All phases cleared.");
                }
                FaseFilter::Cualquiera => {}
            }
        }

        update_subvencion(&pool.conn, &rec)?;
        let _ = ttlog(&pool.conn, "edit", &id.to_string(), "record updated");

        success(format!("Record #{} '{}' updated.", rec.id, rec.nombre));
    }

    Ok(())
}
