use super::{Motivo, contiene_marcador};
use crate::grid::Cell;
use crate::models::Fecha;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Component order of a matched pattern's three capture groups.
enum Orden {
    /// year-month-day (captures 1..3)
    Amd,
    /// day-month-year (captures 1..3)
    Dma,
    /// day-month, year defaults to the current one (captures 1..2)
    Dm,
}

fn patrones() -> &'static [(Regex, Orden)] {
    static PATRONES: OnceLock<Vec<(Regex, Orden)>> = OnceLock::new();
    PATRONES.get_or_init(|| {
        // Attempted in order; first match wins. The four-digit-year
        // forms come before the two-digit one so "07/12/2023" never
        // leaves "23" behind as trailing text.
        vec![
            (Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})").unwrap(), Orden::Amd),
            (Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})").unwrap(), Orden::Dma),
            (Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})").unwrap(), Orden::Dma),
            (Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})").unwrap(), Orden::Dma),
            (Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})").unwrap(), Orden::Dma),
            (Regex::new(r"^(\d{1,2})/(\d{1,2})").unwrap(), Orden::Dm),
        ]
    })
}

/// Coerce a raw cell into a calendar date, preserving any trailing free
/// text (an account reference, usually) as the note. Total: descriptive
/// or unrecognizable content yields `None` with the reason alongside.
pub fn parse_fecha(cell: &Cell) -> (Option<Fecha>, Option<Motivo>) {
    let t = match cell {
        Cell::Empty => return (None, None),
        Cell::Text(s) => s.trim().to_string(),
        Cell::Number(v) => v.to_string(),
        Cell::Bool(_) => return (None, Some(Motivo::Ilegible)),
    };
    if t.is_empty() {
        return (None, None);
    }
    if contiene_marcador(&t) {
        return (None, Some(Motivo::Descriptivo));
    }

    for (re, orden) in patrones() {
        if let Some(caps) = re.captures(&t) {
            let dia = match armar_fecha(&caps, orden) {
                Some(d) => d,
                // Matched digits but not a real calendar date
                // (e.g. month 13): try the next pattern.
                None => continue,
            };

            let resto = &t[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
            let nota = limpiar_nota(resto);
            return (Some(Fecha::with_nota(dia, nota)), None);
        }
    }

    (None, Some(Motivo::Ilegible))
}

fn armar_fecha(caps: &regex::Captures<'_>, orden: &Orden) -> Option<NaiveDate> {
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let (anyo, mes, dia) = match orden {
        Orden::Amd => (num(1)? as i32, num(2)?, num(3)?),
        Orden::Dma => {
            let a = num(3)?;
            // Two-digit years are this century.
            let a = if a < 100 { 2000 + a } else { a };
            (a as i32, num(2)?, num(1)?)
        }
        Orden::Dm => (Local::now().year(), num(2)?, num(1)?),
    };

    NaiveDate::from_ymd_opt(anyo, mes, dia)
}

/// Trailing text after the date pattern, stripped of the separator dash
/// and space-joined.
fn limpiar_nota(resto: &str) -> Option<String> {
    let limpio = resto
        .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '–')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if limpio.is_empty() { None } else { Some(limpio) }
}
