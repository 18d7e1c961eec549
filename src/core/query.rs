//! In-memory filter, sort and aggregates over a caller-owned record set.
//! There is deliberately no cached "current" set here: the caller holds
//! the records and passes them in.

use crate::errors::{AppError, AppResult};
use crate::models::{Importe, Subvencion};

/// Phase-presence predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaseFilter {
    /// No phase condition.
    #[default]
    Cualquiera,
    /// Records with no active phase at all.
    Ninguna,
    /// Records whose N-th phase (1-based) is active.
    Activa(usize),
}

impl FaseFilter {
    /// Parse the CLI form: "none" or a 1..=8 phase number.
    pub fn parse(s: &str) -> AppResult<FaseFilter> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(FaseFilter::Ninguna);
        }
        match s.parse::<usize>() {
            Ok(n) if (1..=8).contains(&n) => Ok(FaseFilter::Activa(n)),
            _ => Err(AppError::InvalidFase(format!(
                "'{}' (expected 'none' or a phase number 1-8)",
                s
            ))),
        }
    }
}

/// Conjunction of independently optional predicates.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Case-insensitive substring over nombre / proyecto / expediente /
    /// codigo / modalidad.
    pub texto: Option<String>,
    pub estado: Option<String>,
    pub anyo: Option<String>,
    pub modalidad: Option<String>,
    pub proyecto: Option<String>,
    pub fase: FaseFilter,
}

impl Filter {
    pub fn matches(&self, s: &Subvencion) -> bool {
        if let Some(needle) = &self.texto
            && !texto_match(s, needle)
        {
            return false;
        }
        if !eq_match(&self.estado, &s.estado)
            || !eq_match(&self.anyo, &s.anyo_otorgamiento)
            || !eq_match(&self.modalidad, &s.modalidad)
            || !eq_match(&self.proyecto, &s.proyecto)
        {
            return false;
        }
        match self.fase {
            FaseFilter::Cualquiera => true,
            FaseFilter::Ninguna => s.fases.ninguna_activa(),
            FaseFilter::Activa(n) => s.fases.is_activa(n - 1),
        }
    }
}

fn texto_match(s: &Subvencion, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let campos = [
        Some(&s.nombre),
        s.proyecto.as_ref(),
        s.expediente.as_ref(),
        s.codigo.as_ref(),
        s.modalidad.as_ref(),
    ];
    campos
        .into_iter()
        .flatten()
        .any(|c| c.to_lowercase().contains(&needle))
}

fn eq_match(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual
            .as_ref()
            .is_some_and(|a| a.to_lowercase() == w.to_lowercase()),
    }
}

/// Sort criterion — selected, not combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Nombre,
    /// Granted amount, largest first.
    Otorgado,
    /// As loaded (rowid order for persisted sets, column order for a
    /// fresh import).
    #[default]
    Creacion,
}

/// Filter and sort one record set, borrowing from the caller's slice.
pub fn seleccionar<'a>(
    records: &'a [Subvencion],
    filter: &Filter,
    sort: SortKey,
) -> Vec<&'a Subvencion> {
    let mut out: Vec<&Subvencion> = records.iter().filter(|s| filter.matches(s)).collect();
    match sort {
        SortKey::Nombre => out.sort_by(|a, b| a.nombre.to_lowercase().cmp(&b.nombre.to_lowercase())),
        SortKey::Otorgado => {
            out.sort_by(|a, b| b.importe_otorgado.cents().cmp(&a.importe_otorgado.cents()))
        }
        SortKey::Creacion => {}
    }
    out
}

/// Aggregates over a (possibly filtered) record set. Zero-amount
/// canonical values contribute zero, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub registros: usize,
    pub solicitado: Importe,
    pub otorgado: Importe,
    pub abonado: Importe,
    pub pendiente: Importe,
}

pub fn totals<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a Subvencion>,
{
    let mut t = Totals::default();
    for s in records {
        t.registros += 1;
        t.solicitado += s.importe_solicitado;
        t.otorgado += s.importe_otorgado;
        t.abonado += s.abonado();
    }
    t.pendiente = t.otorgado - t.abonado;
    t
}
