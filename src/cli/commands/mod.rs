pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod totals;

use crate::cli::parser::{FilterArgs, SortArg};
use crate::core::query::{FaseFilter, Filter, SortKey};
use crate::errors::AppResult;

/// Translate the shared CLI filter flags into a Query Layer filter.
pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<Filter> {
    let fase = match &args.fase {
        Some(s) => FaseFilter::parse(s)?,
        None => FaseFilter::Cualquiera,
    };

    Ok(Filter {
        texto: args.search.clone(),
        estado: args.estado.clone(),
        anyo: args.anyo.clone(),
        modalidad: args.modalidad.clone(),
        proyecto: args.proyecto.clone(),
        fase,
    })
}

pub(crate) fn sort_key(arg: SortArg) -> SortKey {
    match arg {
        SortArg::Nombre => SortKey::Nombre,
        SortArg::Otorgado => SortKey::Otorgado,
        SortArg::Creacion => SortKey::Creacion,
    }
}
