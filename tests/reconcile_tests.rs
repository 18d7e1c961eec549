mod common;
use common::setup_test_db;

use subtracker::core::reconcile::replace_all;
use subtracker::db::initialize::init_db;
use subtracker::db::pool::DbPool;
use subtracker::db::queries::{count, insert_subvencion, load_all};
use subtracker::models::{Importe, Subvencion};

fn open_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

fn record(nombre: &str, otorgado_cents: i64) -> Subvencion {
    let mut s = Subvencion::new(nombre);
    s.importe_otorgado = Importe::from_cents(otorgado_cents);
    s
}

#[test]
fn replace_all_swaps_the_record_set() {
    let db = setup_test_db("reconcile_swap");
    let mut pool = open_pool(&db);

    insert_subvencion(&pool.conn, &record("VIEJA", 100)).expect("seed");
    assert_eq!(count(&pool.conn).expect("count"), 1);

    let fresh = vec![record("NUEVA A", 1_000), record("NUEVA B", 2_000)];
    let report = replace_all(&mut pool, &fresh).expect("reconcile");

    assert_eq!(report.created, 2);
    assert_eq!(report.errors, 0);

    let stored = load_all(&mut pool).expect("load");
    let nombres: Vec<&str> = stored.iter().map(|s| s.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["NUEVA A", "NUEVA B"]);
}

#[test]
fn failed_inserts_are_counted_and_skipped() {
    let db = setup_test_db("reconcile_partial");
    let mut pool = open_pool(&db);

    // 10 fresh records; #4 violates the non-negative amount constraint
    // and must fail its insert without touching the rest.
    let mut fresh: Vec<Subvencion> = (1..=10)
        .map(|i| record(&format!("SUB {:02}", i), i * 100))
        .collect();
    fresh[3].importe_otorgado = Importe::from_cents(-1);

    let report = replace_all(&mut pool, &fresh).expect("reconcile");

    assert_eq!(report.created, 9);
    assert_eq!(report.errors, 1);

    let stored = load_all(&mut pool).expect("load");
    assert_eq!(stored.len(), 9);
    assert!(!stored.iter().any(|s| s.nombre == "SUB 04"));
    assert!(stored.iter().any(|s| s.nombre == "SUB 05"));
}

#[test]
fn reconcile_with_empty_set_just_clears() {
    let db = setup_test_db("reconcile_empty");
    let mut pool = open_pool(&db);

    insert_subvencion(&pool.conn, &record("VIEJA", 100)).expect("seed");

    let report = replace_all(&mut pool, &[]).expect("reconcile");
    assert_eq!(report.created, 0);
    assert_eq!(report.errors, 0);
    assert_eq!(count(&pool.conn).expect("count"), 0);
}

#[test]
fn store_round_trip_preserves_canonical_values() {
    let db = setup_test_db("reconcile_roundtrip");
    let mut pool = open_pool(&db);

    let grid = subtracker::grid::RawGrid::new(
        common::fixture_cells()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|c| subtracker::grid::Cell::from_raw(&c))
                    .collect()
            })
            .collect(),
    );
    let layout = subtracker::import::SheetLayout::standard();
    let cols = subtracker::grid::locate_columns(&grid, layout.header_row_index());
    let out = subtracker::import::assemble_records(&grid, &cols, &layout);

    replace_all(&mut pool, &out.records).expect("reconcile");
    let stored = load_all(&mut pool).expect("load");

    let a = &out.records[0];
    let b = &stored[0];
    assert_eq!(a.nombre, b.nombre);
    assert_eq!(a.importe_otorgado, b.importe_otorgado);
    assert_eq!(a.fecha_presentacion, b.fecha_presentacion);
    assert_eq!(a.fases, b.fases);
    assert_eq!(a.estado, b.estado);
}
