//! Project layout errors

use std::path::Path;

use super::UltracError;

/// Creates a missing-data-directory error (fatal)
pub fn data_dir_not_found(path: &Path) -> UltracError {
    UltracError::DataDirNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a missing-preamble error (fatal)
pub fn preamble_not_found(path: &Path) -> UltracError {
    UltracError::PreambleNotFound {
        path: path.display().to_string(),
    }
}
