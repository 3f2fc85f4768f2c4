//! Unified application error type.
//! All modules (core, input, config, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    // ---------------------------
    // Analysis errors
    // ---------------------------
    #[error("No records to analyze")]
    EmptyInput,

    #[error("At least two distinct employees are required, found {0}")]
    InsufficientEmployees(usize),

    #[error("Cannot compute a pair breakdown for employee '{0}' with themselves")]
    IdenticalEmployeeIds(String),

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Analysis worker error: {0}")]
    Worker(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
