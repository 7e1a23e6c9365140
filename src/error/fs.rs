//! File system errors

use std::path::Path;

use super::UltracError;

/// Creates a read failure carrying the path and the underlying cause
pub fn read_failed(path: &Path, err: &std::io::Error) -> UltracError {
    UltracError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failure carrying the path and the underlying cause
pub fn write_failed(path: &Path, err: &std::io::Error) -> UltracError {
    UltracError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> UltracError {
    UltracError::IoError {
        message: message.into(),
    }
}
