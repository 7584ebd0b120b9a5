//! Unified application error type.
//! All modules (db, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Rejected input from the `add` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid {field} (expected HH:MM): {value}")]
    InvalidTime { field: &'static str, value: String },

    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    EntryNotFound(i64),

    #[error("No data for period: {0}")]
    EmptyReport(String),

    // ---------------------------
    // External sources
    // ---------------------------
    #[error("{0}")]
    Glossary(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

pub type AppResult<T> = Result<T, AppError>;
