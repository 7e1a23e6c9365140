//! Discovery of candidate units under the data directory.

use std::path::Path;

use crate::error::{Result, fs as fs_error};

use super::unit::Unit;

/// Enumerate the immediate subdirectories of the data directory as units.
///
/// Hidden directories (name starting with `.`), plain files and entries with
/// non-UTF-8 names are ignored. Units are sorted by name so diagnostics and
/// artifact creation order are deterministic.
pub fn discover_units(data_dir: &Path) -> Result<Vec<Unit>> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| fs_error::read_failed(data_dir, &e))?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| fs_error::read_failed(data_dir, &e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        units.push(Unit::new(name, path));
    }

    units.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(units)
}
