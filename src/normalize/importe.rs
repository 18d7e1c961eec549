use super::{Motivo, contiene_marcador};
use crate::grid::Cell;
use crate::models::Importe;

/// Coerce a raw cell into a monetary amount. Total: ambiguous or
/// descriptive input normalizes to zero, with the reason reported
/// alongside.
pub fn parse_importe(cell: &Cell) -> (Importe, Option<Motivo>) {
    match cell {
        Cell::Empty => (Importe::ZERO, None),
        Cell::Bool(_) => (Importe::ZERO, Some(Motivo::Ilegible)),
        Cell::Number(v) => desde_nativo(*v),
        Cell::Text(s) => desde_texto(s),
    }
}

/// Native numbers can carry a known export artifact: a value whose
/// fractional part runs past two digits with no thousands grouping is a
/// decimal-misalignment ("37.70428" really means 37704.28 — the last two
/// fractional digits are the cents). Reconstitute and flag it.
fn desde_nativo(v: f64) -> (Importe, Option<Motivo>) {
    let repr = format!("{}", v);
    if let Some((entera, fraccion)) = repr.split_once('.')
        && fraccion.len() > 2
        && let Ok(cents) = format!("{}{}", entera, fraccion).parse::<i64>()
    {
        return (Importe::from_cents(cents), Some(Motivo::AjusteDecimal));
    }
    (Importe::from_euros(v), None)
}

fn desde_texto(raw: &str) -> (Importe, Option<Motivo>) {
    let t = raw.trim();
    if t.is_empty() {
        return (Importe::ZERO, None);
    }
    if contiene_marcador(t) {
        return (Importe::ZERO, Some(Motivo::Descriptivo));
    }

    // A leading amount followed by a percentage breakdown is common
    // ("1.000 (50%)"); only the leading amount is kept.
    let mut s = t.to_string();
    if (s.contains('(') || s.contains('%'))
        && let Some(i) = s.find('(')
    {
        s.truncate(i);
    }

    // Strip currency symbols and whitespace.
    let s: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€' && *c != '$')
        .collect();

    let canonico = desambiguar_separadores(&s);
    match canonico.parse::<f64>() {
        Ok(v) => (Importe::from_euros(v), None),
        Err(_) => (Importe::ZERO, Some(Motivo::Ilegible)),
    }
}

/// Resolve mixed-locale separators to a canonical '.'-decimal string.
///
/// - Both ',' and '.' present: the rightmost of the two is the decimal
///   separator, the other is thousands grouping.
/// - Only commas: a final comma followed by exactly 1–2 digits is the
///   decimal separator, anything else is grouping.
/// - Only dots: the symmetric rule.
fn desambiguar_separadores(s: &str) -> String {
    let ultima_coma = s.rfind(',');
    let ultimo_punto = s.rfind('.');

    match (ultima_coma, ultimo_punto) {
        (Some(c), Some(p)) => {
            let decimal_en = if c > p { c } else { p };
            reescribir(s, Some(decimal_en))
        }
        (Some(c), None) => {
            if es_cola_decimal(s, c) {
                reescribir(s, Some(c))
            } else {
                reescribir(s, None)
            }
        }
        (None, Some(p)) => {
            if es_cola_decimal(s, p) {
                reescribir(s, Some(p))
            } else {
                reescribir(s, None)
            }
        }
        (None, None) => s.to_string(),
    }
}

/// True when the separator at byte `pos` is followed by exactly 1–2
/// digits reaching the end of the string.
fn es_cola_decimal(s: &str, pos: usize) -> bool {
    let cola = &s[pos + 1..];
    (1..=2).contains(&cola.len()) && cola.chars().all(|c| c.is_ascii_digit())
}

/// Drop every ',' and '.' except the one at `decimal_en`, which becomes
/// a '.'.
fn reescribir(s: &str, decimal_en: Option<usize>) -> String {
    s.char_indices()
        .filter_map(|(i, c)| match c {
            ',' | '.' => {
                if Some(i) == decimal_en {
                    Some('.')
                } else {
                    None
                }
            }
            _ => Some(c),
        })
        .collect()
}
