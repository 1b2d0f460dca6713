//! Unified application error type.
//! Store, scheduling engine, CLI and HTTP layer all return AppError so the
//! error handling stays consistent from the JSON file up to the response.

use std::io;
use thiserror::Error;

/// Coarse classification a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    BadRequest,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    /// Backing file exists but cannot be parsed. Consumed by the store,
    /// which resets the file to an empty collection.
    #[error("Employee storage is corrupt: {0}")]
    StorageCorrupt(String),

    /// Backing file is valid JSON but a record does not match the employee
    /// schema. The file is left as is.
    #[error("Employee storage holds an invalid record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Request errors
    // ---------------------------
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid employee data: {0}")]
    InvalidEmployee(String),

    // ---------------------------
    // Scheduling
    // ---------------------------
    #[error("Schedule lookup error: {0}")]
    LookupInconsistency(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // HTTP service
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::NotFound(_) => ErrorCategory::NotFound,
            AppError::Conflict(_) | AppError::InvalidDate(_) | AppError::InvalidEmployee(_) => {
                ErrorCategory::BadRequest
            }
            _ => ErrorCategory::Internal,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
