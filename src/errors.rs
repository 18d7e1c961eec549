//! Unified application error type.
//! All modules (db, core, cli, grid) return AppError to keep the error
//! handling consistent. Note that unparsable *cell content* is never an
//! error — the normalizers default it; AppError is for structural
//! failures only (unreadable file, unopenable database, bad layout).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / input
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Import / layout
    // ---------------------------
    #[error("Invalid sheet layout: {0}")]
    Layout(String),

    #[error("Invalid record name: {0}")]
    InvalidName(String),

    #[error("Invalid phase filter: {0}")]
    InvalidFase(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
