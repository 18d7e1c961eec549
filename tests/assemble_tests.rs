mod common;
use common::fixture_cells;

use subtracker::grid::{Cell, RawGrid, locate_columns};
use subtracker::import::{SheetLayout, assemble_records};
use subtracker::models::{Fase, Importe};

fn fixture_grid() -> RawGrid {
    RawGrid::new(
        fixture_cells()
            .into_iter()
            .map(|row| row.into_iter().map(|c| Cell::from_raw(&c)).collect())
            .collect(),
    )
}

#[test]
fn assembles_records_in_column_order() {
    let grid = fixture_grid();
    let layout = SheetLayout::standard();
    let cols = locate_columns(&grid, layout.header_row_index());

    let out = assemble_records(&grid, &cols, &layout);

    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[0].nombre, "IMPULSEM");
    assert_eq!(out.records[1].nombre, "BECAS COMEDOR");
}

#[test]
fn fields_are_coerced_by_kind() {
    let grid = fixture_grid();
    let layout = SheetLayout::standard();
    let cols = locate_columns(&grid, layout.header_row_index());

    let out = assemble_records(&grid, &cols, &layout);
    let impulsem = &out.records[0];

    assert_eq!(impulsem.organismo.as_deref(), Some("Ayuntamiento de Valencia"));
    assert_eq!(impulsem.proyecto.as_deref(), Some("Impulsem 2025"));
    assert_eq!(impulsem.estado.as_deref(), Some("CONCEDIDA"));
    assert_eq!(impulsem.importe_solicitado, Importe::from_cents(1_000_000));
    assert_eq!(impulsem.importe_otorgado, Importe::from_cents(123_456));
    assert_eq!(impulsem.primer_abono, Importe::from_cents(50_000));
    // "PENDIENTE" in the second installment row defaults to zero
    assert_eq!(impulsem.segundo_abono, Importe::ZERO);

    let fecha = impulsem.fecha_presentacion.as_ref().expect("date present");
    assert_eq!(fecha.iso(), "2023-12-07");
    assert_eq!(fecha.nota.as_deref(), Some("FIARE 1720"));

    assert_eq!(impulsem.fases.0[0], Fase::Activa);
    assert_eq!(
        impulsem.fases.0[1],
        Fase::ActivaConNota("Revisión técnica".to_string())
    );
    assert!(!impulsem.fases.0[2].is_activa());
    assert_eq!(impulsem.fases.activas(), 2);
}

#[test]
fn every_field_present_even_for_sparse_columns() {
    let grid = fixture_grid();
    let layout = SheetLayout::standard();
    let cols = locate_columns(&grid, layout.header_row_index());

    let out = assemble_records(&grid, &cols, &layout);
    let becas = &out.records[1];

    // unset cells land on the default canonical values
    assert_eq!(becas.proyecto, None);
    assert_eq!(becas.importe_solicitado, Importe::ZERO);
    assert!(becas.fecha_resolucion.is_none());
    assert!(becas.fases.ninguna_activa());
    // "1.000 (50%)" keeps only the leading amount
    assert_eq!(becas.primer_abono, Importe::from_cents(100_000));
}

#[test]
fn post_filter_drops_placeholder_names() {
    // Hand the assembler columns the locator would normally reject, to
    // prove the post-filter is its own gate.
    let grid = fixture_grid();
    let layout = SheetLayout::standard();
    let mut cols = locate_columns(&grid, layout.header_row_index());
    cols.push(subtracker::grid::ColumnIndex {
        col: 2,
        nombre: "-".to_string(),
    });
    cols.push(subtracker::grid::ColumnIndex {
        col: 4,
        nombre: "Z".to_string(),
    });

    let out = assemble_records(&grid, &cols, &layout);

    assert_eq!(out.records.len(), 2);
    assert_eq!(out.dropped, vec!["-".to_string(), "Z".to_string()]);
}

#[test]
fn diagnostics_report_defaulted_cells() {
    let grid = fixture_grid();
    let layout = SheetLayout::standard();
    let cols = locate_columns(&grid, layout.header_row_index());

    let out = assemble_records(&grid, &cols, &layout);

    // the "PENDIENTE" second installment of IMPULSEM
    assert!(
        out.diagnostics
            .iter()
            .any(|d| d.columna == "IMPULSEM" && d.campo == "segundo_abono")
    );
}

#[test]
fn assembly_is_idempotent() {
    let grid = fixture_grid();
    let layout = SheetLayout::standard();

    let cols1 = locate_columns(&grid, layout.header_row_index());
    let cols2 = locate_columns(&grid, layout.header_row_index());
    assert_eq!(cols1, cols2);

    let a = assemble_records(&grid, &cols1, &layout);
    let b = assemble_records(&grid, &cols2, &layout);

    assert_eq!(a.records.len(), b.records.len());
    for (x, y) in a.records.iter().zip(b.records.iter()) {
        // field-for-field identity, ignoring generated identifiers and
        // creation timestamps
        assert_eq!(x.nombre, y.nombre);
        assert_eq!(x.organismo, y.organismo);
        assert_eq!(x.estado, y.estado);
        assert_eq!(x.importe_otorgado, y.importe_otorgado);
        assert_eq!(x.primer_abono, y.primer_abono);
        assert_eq!(x.segundo_abono, y.segundo_abono);
        assert_eq!(x.fecha_presentacion, y.fecha_presentacion);
        assert_eq!(x.fases, y.fases);
    }
}

#[test]
fn layout_validation_catches_duplicates() {
    let mut layout = SheetLayout::standard();
    layout.fields[1].row = layout.fields[0].row;
    assert!(layout.validate().is_err());

    let layout = SheetLayout::standard();
    assert!(layout.validate().is_ok());
}
