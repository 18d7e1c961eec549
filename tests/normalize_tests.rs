use chrono::{Datelike, Local};
use subtracker::grid::Cell;
use subtracker::models::{Fase, Importe};
use subtracker::normalize::{Motivo, parse_fase, parse_fecha, parse_importe, parse_texto};

fn texto(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

// ---------------------------------------------------------------
// Currency
// ---------------------------------------------------------------

#[test]
fn importe_descriptive_markers_default_to_zero() {
    for raw in [
        "PENDING",
        "PENDIENTE",
        "pendiente de resolución",
        "POR DEFINIR",
        "por gestionar",
        "Sin fecha",
        "SALDO a favor",
        "importe ESTIMADO",
    ] {
        let (v, motivo) = parse_importe(&texto(raw));
        assert_eq!(v, Importe::ZERO, "raw: {raw}");
        assert_eq!(motivo, Some(Motivo::Descriptivo), "raw: {raw}");
    }
}

#[test]
fn importe_european_format() {
    let (v, motivo) = parse_importe(&texto("1.234,56€"));
    assert_eq!(v, Importe::from_cents(123_456));
    assert_eq!(motivo, None);
}

#[test]
fn importe_anglo_format_same_value() {
    let (v, _) = parse_importe(&texto("1,234.56"));
    assert_eq!(v, Importe::from_cents(123_456));
}

#[test]
fn importe_only_commas() {
    // trailing 1-2 digits after the comma → decimal
    let (v, _) = parse_importe(&texto("12,5"));
    assert_eq!(v, Importe::from_cents(1_250));
    // three digits → thousands grouping
    let (v, _) = parse_importe(&texto("12,500"));
    assert_eq!(v, Importe::from_cents(1_250_000));
}

#[test]
fn importe_only_dots() {
    let (v, _) = parse_importe(&texto("10.000"));
    assert_eq!(v, Importe::from_cents(1_000_000));
    let (v, _) = parse_importe(&texto("10.50"));
    assert_eq!(v, Importe::from_cents(1_050));
}

#[test]
fn importe_truncates_percentage_breakdown() {
    let (v, motivo) = parse_importe(&texto("1.000 (50%)"));
    assert_eq!(v, Importe::from_cents(100_000));
    assert_eq!(motivo, None);
}

#[test]
fn importe_decimal_shift_on_native_numbers() {
    let (v, motivo) = parse_importe(&Cell::Number(37.70428));
    assert_eq!(v, Importe::from_cents(3_770_428));
    assert_eq!(motivo, Some(Motivo::AjusteDecimal));
}

#[test]
fn importe_native_number_with_plain_cents_is_untouched() {
    let (v, motivo) = parse_importe(&Cell::Number(1234.56));
    assert_eq!(v, Importe::from_cents(123_456));
    assert_eq!(motivo, None);
}

#[test]
fn importe_garbage_defaults_to_zero() {
    let (v, motivo) = parse_importe(&texto("ver contrato"));
    assert_eq!(v, Importe::ZERO);
    assert_eq!(motivo, Some(Motivo::Ilegible));
}

#[test]
fn importe_empty_is_zero_without_diagnostic() {
    let (v, motivo) = parse_importe(&Cell::Empty);
    assert_eq!(v, Importe::ZERO);
    assert_eq!(motivo, None);
}

// ---------------------------------------------------------------
// Dates
// ---------------------------------------------------------------

#[test]
fn fecha_with_trailing_account_note() {
    let (f, motivo) = parse_fecha(&texto("07/12/2023 - FIARE 1720"));
    let f = f.expect("date should parse");
    assert_eq!(f.iso(), "2023-12-07");
    assert_eq!(f.nota.as_deref(), Some("FIARE 1720"));
    assert_eq!(motivo, None);
}

#[test]
fn fecha_iso_input() {
    let (f, _) = parse_fecha(&texto("2024-3-9"));
    assert_eq!(f.expect("parses").iso(), "2024-03-09");
}

#[test]
fn fecha_two_digit_year() {
    let (f, _) = parse_fecha(&texto("5/6/23"));
    assert_eq!(f.expect("parses").iso(), "2023-06-05");
}

#[test]
fn fecha_dotted_and_dashed_forms() {
    let (f, _) = parse_fecha(&texto("1.2.2022"));
    assert_eq!(f.expect("parses").iso(), "2022-02-01");
    let (f, _) = parse_fecha(&texto("14-07-2021"));
    assert_eq!(f.expect("parses").iso(), "2021-07-14");
}

#[test]
fn fecha_bare_day_month_defaults_to_current_year() {
    let (f, motivo) = parse_fecha(&texto("9/5"));
    let f = f.expect("parses");
    assert_eq!(f.dia.year(), Local::now().year());
    assert_eq!(f.dia.month(), 5);
    assert_eq!(f.dia.day(), 9);
    assert_eq!(motivo, None);

    // a full date must never fall into the bare day/month form
    let (f, _) = parse_fecha(&texto("07/12/2023"));
    assert_eq!(f.expect("parses").iso(), "2023-12-07");
}

#[test]
fn fecha_markers_yield_absent() {
    let (f, motivo) = parse_fecha(&texto("PENDIENTE de ingreso"));
    assert!(f.is_none());
    assert_eq!(motivo, Some(Motivo::Descriptivo));
}

#[test]
fn fecha_unparsable_yields_absent() {
    let (f, motivo) = parse_fecha(&texto("cuando se pueda"));
    assert!(f.is_none());
    assert_eq!(motivo, Some(Motivo::Ilegible));
}

#[test]
fn fecha_round_trips_through_cell_form() {
    let (f, _) = parse_fecha(&texto("07/12/2023 - FIARE 1720"));
    let f = f.expect("parses");
    let (again, _) = parse_fecha(&texto(&f.as_celda()));
    assert_eq!(again.expect("round trip"), f);
}

// ---------------------------------------------------------------
// Phases
// ---------------------------------------------------------------

#[test]
fn fase_x_marker_is_active() {
    assert_eq!(parse_fase(&texto("X")), Fase::Activa);
    assert_eq!(parse_fase(&texto(" x ")), Fase::Activa);
}

#[test]
fn fase_blank_and_dashes_are_inactive() {
    assert_eq!(parse_fase(&Cell::Empty), Fase::Inactiva);
    assert_eq!(parse_fase(&texto("")), Fase::Inactiva);
    assert_eq!(parse_fase(&texto("-")), Fase::Inactiva);
    assert_eq!(parse_fase(&texto("--")), Fase::Inactiva);
}

#[test]
fn fase_free_text_is_annotated_active() {
    assert_eq!(
        parse_fase(&texto("Revisión técnica")),
        Fase::ActivaConNota("Revisión técnica".to_string())
    );
}

#[test]
fn fase_pretyped_booleans() {
    assert_eq!(parse_fase(&Cell::Bool(true)), Fase::Activa);
    assert_eq!(parse_fase(&Cell::Bool(false)), Fase::Inactiva);
}

// ---------------------------------------------------------------
// Text
// ---------------------------------------------------------------

#[test]
fn texto_trims_and_absents() {
    assert_eq!(parse_texto(&texto("  hola  ")), Some("hola".to_string()));
    assert_eq!(parse_texto(&texto("   ")), None);
    assert_eq!(parse_texto(&Cell::Empty), None);
}
