#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stk() -> Command {
    cargo_bin_cmd!("subtracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_subtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Build the cell matrix of a small but realistic export: header on row 8,
/// two real record columns plus two placeholder columns, field rows per
/// the standard layout. Rows/cols are 1-indexed here to match the sheet
/// contract; the writer flattens them.
pub fn fixture_cells() -> Vec<Vec<String>> {
    let mut rows = vec![vec![String::new(); 5]; 51];
    let mut set = |row: usize, col: usize, v: &str| rows[row - 1][col] = v.to_string();

    // header row: names in columns 1 and 3, placeholders in 2 and 4
    set(8, 1, "IMPULSEM");
    set(8, 2, ".");
    set(8, 3, "BECAS COMEDOR");
    set(8, 4, "--");

    // column 1: IMPULSEM
    set(9, 1, "Ayuntamiento de Valencia");
    set(12, 1, "Impulsem 2025");
    set(15, 1, "Concurrencia");
    set(16, 1, "2025");
    set(17, 1, "CONCEDIDA");
    set(20, 1, "07/12/2023 - FIARE 1720");
    set(27, 1, "10.000,00€");
    set(28, 1, "1.234,56€");
    set(31, 1, "500");
    set(33, 1, "PENDIENTE");
    set(40, 1, "X");
    set(41, 1, "Revisión técnica");

    // column 3: BECAS COMEDOR
    set(9, 3, "Generalitat");
    set(16, 3, "2024");
    set(17, 3, "JUSTIFICADA");
    set(28, 3, "1,234.56");
    set(31, 3, "1.000 (50%)");
    set(40, 3, "-");

    rows
}

/// Write the fixture as a semicolon-separated export file and return its path.
pub fn write_fixture(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    let p = path.to_string_lossy().to_string();

    let content: String = fixture_cells()
        .iter()
        .map(|row| row.join(";"))
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(&p, content).expect("write fixture");
    p
}

/// Init DB and import the fixture: the starting state for most CLI tests.
pub fn init_db_with_fixture(db_path: &str, name: &str) -> String {
    stk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture(name);
    stk()
        .args(["--db", db_path, "--test", "import", &fixture])
        .assert()
        .success();

    fixture
}
