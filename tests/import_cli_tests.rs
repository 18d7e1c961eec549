use predicates::str::contains;

mod common;
use common::{init_db_with_fixture, setup_test_db, stk, write_fixture};

#[test]
fn test_import_and_list() {
    let db_path = setup_test_db("import_and_list");
    init_db_with_fixture(&db_path, "import_and_list");

    stk()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("IMPULSEM"))
        .stdout(contains("BECAS COMEDOR"))
        .stdout(contains("2 records"));
}

#[test]
fn test_import_reports_counts() {
    let db_path = setup_test_db("import_counts");

    stk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture("import_counts");
    stk()
        .args(["--db", &db_path, "--test", "import", &fixture])
        .assert()
        .success()
        .stdout(contains("assembled 2 records"))
        .stdout(contains("2 records created"));
}

#[test]
fn test_import_is_a_wholesale_replace() {
    let db_path = setup_test_db("import_replace");
    let fixture = init_db_with_fixture(&db_path, "import_replace");

    // re-import: still 2 records, not 4
    stk()
        .args(["--db", &db_path, "--test", "import", &fixture])
        .assert()
        .success();

    stk()
        .args(["--db", &db_path, "--test", "totals"])
        .assert()
        .success()
        .stdout(contains("Registros:   2"));
}

#[test]
fn test_dry_run_leaves_database_untouched() {
    let db_path = setup_test_db("import_dry_run");

    stk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture("import_dry_run");
    stk()
        .args(["--db", &db_path, "--test", "import", "--dry-run", &fixture])
        .assert()
        .success()
        .stdout(contains("Dry run"));

    stk()
        .args(["--db", &db_path, "--test", "totals"])
        .assert()
        .success()
        .stdout(contains("Registros:   0"));
}

#[test]
fn test_diagnostics_flag_reports_defaulted_cells() {
    let db_path = setup_test_db("import_diagnostics");

    stk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture("import_diagnostics");
    stk()
        .args([
            "--db",
            &db_path,
            "--test",
            "import",
            "--dry-run",
            "--diagnostics",
            &fixture,
        ])
        .assert()
        .success()
        .stdout(contains("segundo_abono"))
        .stdout(contains("PENDIENTE"));
}

#[test]
fn test_totals_aggregates() {
    let db_path = setup_test_db("totals_aggregates");
    init_db_with_fixture(&db_path, "totals_aggregates");

    stk()
        .args(["--db", &db_path, "--test", "totals"])
        .assert()
        .success()
        .stdout(contains("Registros:   2"))
        .stdout(contains("Solicitado:  10000.00 €"))
        .stdout(contains("Otorgado:    2469.12 €"))
        .stdout(contains("Abonado:     1500.00 €"))
        .stdout(contains("Pendiente:   969.12 €"));
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");
    init_db_with_fixture(&db_path, "list_filters");

    stk()
        .args(["--db", &db_path, "--test", "list", "--estado", "CONCEDIDA"])
        .assert()
        .success()
        .stdout(contains("IMPULSEM"))
        .stdout(contains("1 records"));

    stk()
        .args(["--db", &db_path, "--test", "list", "--fase", "none"])
        .assert()
        .success()
        .stdout(contains("BECAS COMEDOR"))
        .stdout(contains("1 records"));

    stk()
        .args(["--db", &db_path, "--test", "list", "--search", "becas"])
        .assert()
        .success()
        .stdout(contains("BECAS COMEDOR"));
}

#[test]
fn test_add_and_del_single_record() {
    let db_path = setup_test_db("add_del");

    stk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stk()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "AYUDA MANUAL",
            "--otorgado",
            "1.234,56€",
            "--estado",
            "CONCEDIDA",
        ])
        .assert()
        .success()
        .stdout(contains("created"));

    stk()
        .args(["--db", &db_path, "--test", "totals"])
        .assert()
        .success()
        .stdout(contains("Otorgado:    1234.56 €"));

    stk()
        .args(["--db", &db_path, "--test", "del", "--id", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    stk()
        .args(["--db", &db_path, "--test", "totals"])
        .assert()
        .success()
        .stdout(contains("Registros:   0"));
}

#[test]
fn test_edit_updates_fields_in_place() {
    let db_path = setup_test_db("edit_fields");
    init_db_with_fixture(&db_path, "edit_fields");

    // record 1 is IMPULSEM: CONCEDIDA, 1234.56 granted, phases 1-2 reached
    stk()
        .args([
            "--db",
            &db_path,
            "--test",
            "edit",
            "1",
            "--estado",
            "JUSTIFICADA",
            "--otorgado",
            "2.000,00€",
            "--fase",
            "3",
        ])
        .assert()
        .success()
        .stdout(contains("Phase 3 (Aceptación)"))
        .stdout(contains("updated"));

    stk()
        .args(["--db", &db_path, "--test", "totals", "--estado", "JUSTIFICADA"])
        .assert()
        .success()
        .stdout(contains("Registros:   2"))
        .stdout(contains("Otorgado:    3234.56 €"));

    stk()
        .args(["--db", &db_path, "--test", "list", "--fase", "3"])
        .assert()
        .success()
        .stdout(contains("IMPULSEM"))
        .stdout(contains("1 records"));
}

#[test]
fn test_edit_clears_phases_and_rejects_unknown_id() {
    let db_path = setup_test_db("edit_phases");
    init_db_with_fixture(&db_path, "edit_phases");

    stk()
        .args(["--db", &db_path, "--test", "edit", "1", "--fase", "none"])
        .assert()
        .success()
        .stdout(contains("All phases cleared"));

    stk()
        .args(["--db", &db_path, "--test", "list", "--fase", "none"])
        .assert()
        .success()
        .stdout(contains("2 records"));

    stk()
        .args(["--db", &db_path, "--test", "edit", "99", "--estado", "X"])
        .assert()
        .failure();
}

#[test]
fn test_add_rejects_placeholder_name() {
    let db_path = setup_test_db("add_placeholder");

    stk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    stk()
        .args(["--db", &db_path, "--test", "add", "-"])
        .assert()
        .failure();
}

#[test]
fn test_log_records_import_activity() {
    let db_path = setup_test_db("log_activity");
    init_db_with_fixture(&db_path, "log_activity");

    stk()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("reconcile"));
}

#[test]
fn test_db_check() {
    let db_path = setup_test_db("db_check");
    init_db_with_fixture(&db_path, "db_check");

    stk()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity"));
}
