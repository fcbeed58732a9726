//! Unified application error type.
//! Catalog, engine, storage and CLI layers all return AppError so the
//! binary has a single place that turns failures into an exit code.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Stored history or theme could not be decoded.
    /// Always recovered by falling back to defaults.
    #[error("Unreadable stored value: {0}")]
    PersistenceRead(String),

    // ---------------------------
    // Catalog / engine
    // ---------------------------
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid history index: {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Presentation
    // ---------------------------
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration file error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
