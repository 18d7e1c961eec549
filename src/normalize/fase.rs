use crate::grid::Cell;
use crate::models::Fase;

/// Coerce a raw cell into a phase marker. Total, and never produces a
/// diagnostic: any non-empty content that is not the bare "X" marker is
/// by definition an annotated active phase.
pub fn parse_fase(cell: &Cell) -> Fase {
    match cell {
        // Pre-typed values from the store map directly.
        Cell::Bool(true) => Fase::Activa,
        Cell::Bool(false) => Fase::Inactiva,
        Cell::Empty => Fase::Inactiva,
        Cell::Number(v) => desde_texto(&v.to_string()),
        Cell::Text(s) => desde_texto(s),
    }
}

fn desde_texto(raw: &str) -> Fase {
    let t = raw.trim();
    match t {
        "" | "-" | "--" => Fase::Inactiva,
        _ if t.eq_ignore_ascii_case("X") => Fase::Activa,
        _ => Fase::ActivaConNota(t.to_string()),
    }
}
