//! Artifact writing: output-directory creation and file writes with
//! path-carrying errors.

use std::path::Path;

use crate::error::{Result, fs as fs_error};

/// Create the output directory if it does not exist yet (idempotent).
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| fs_error::write_failed(dir, &e))
}

/// Write a compiled artifact, replacing any previous version.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| fs_error::write_failed(path, &e))
}
