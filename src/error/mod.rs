//! Error types and handling for Ultrac
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`layout`]: project layout errors (the fatal preconditions)
//! - [`fs`]: file system errors (per-unit, recoverable)

pub mod fs;
pub mod layout;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Ultrac operations
#[derive(Error, Diagnostic, Debug)]
pub enum UltracError {
    // Layout errors (fatal: abort before any unit is processed)
    #[error("Data directory not found at: {path}")]
    #[diagnostic(
        code(ultrac::layout::data_dir_not_found),
        help("Create a data/ directory under the project root, or pass --root")
    )]
    DataDirNotFound { path: String },

    #[error("Preamble file not found: {path}")]
    #[diagnostic(
        code(ultrac::layout::preamble_not_found),
        help("Every project needs a data/common.yaml shared preamble")
    )]
    PreambleNotFound { path: String },

    // File system errors (per-unit: reported, processing continues)
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(ultrac::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ultrac::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ultrac::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for UltracError {
    fn from(err: std::io::Error) -> Self {
        UltracError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UltracError>;
