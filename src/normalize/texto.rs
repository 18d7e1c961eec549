use crate::grid::Cell;

/// Coerce a raw cell into a trimmed string. Empty input means the field
/// is simply not present for this record.
pub fn parse_texto(cell: &Cell) -> Option<String> {
    let t = match cell {
        Cell::Empty => return None,
        Cell::Text(s) => s.trim().to_string(),
        Cell::Number(v) => v.to_string(),
        Cell::Bool(b) => b.to_string(),
    };
    if t.is_empty() { None } else { Some(t) }
}
