//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, fs as fs_error};

/// Resolve the project root from an optional CLI argument.
///
/// If a root path is provided, use it. Otherwise the root is the directory
/// containing the running executable, so data/ and output/ sit next to the
/// binary.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => {
            let exe = std::env::current_exe()
                .map_err(|e| fs_error::io_error(format!("Failed to locate executable: {}", e)))?;
            exe.parent()
                .map(PathBuf::from)
                .ok_or_else(|| fs_error::io_error("Executable path has no parent directory"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_explicit() {
        let root = resolve_root(Some(PathBuf::from("/tmp/project"))).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_resolve_root_defaults_to_exe_dir() {
        let root = resolve_root(None).unwrap();
        assert!(root.is_dir());
    }
}
