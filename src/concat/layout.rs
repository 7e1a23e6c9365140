//! Project layout: where the data sources, the shared preamble and the
//! compiled artifacts live relative to the project root.

use std::path::{Path, PathBuf};

use crate::error::{Result, layout as layout_error};

/// Directory under the root holding the preamble and the unit subdirectories.
pub const DATA_DIR: &str = "data";

/// Directory under the root receiving compiled artifacts.
pub const OUTPUT_DIR: &str = "output";

/// Shared YAML preamble, prepended to every artifact.
pub const PREAMBLE_FILE: &str = "common.yaml";

/// Extension of the per-unit YAML source.
pub const YAML_EXT: &str = "yaml";

/// Extension of the per-unit text source.
pub const TXT_EXT: &str = "txt";

/// Extension of the compiled artifact.
pub const ARTIFACT_EXT: &str = "ultra";

/// Resolves all well-known paths from a project root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn preamble_path(&self) -> PathBuf {
        self.data_dir().join(PREAMBLE_FILE)
    }

    /// Path of the compiled artifact for a unit name.
    pub fn artifact_path(&self, unit_name: &str) -> PathBuf {
        self.output_dir()
            .join(format!("{}.{}", unit_name, ARTIFACT_EXT))
    }

    /// Check the fatal preconditions: the data directory and the preamble
    /// file must exist before any unit is considered.
    pub fn check(&self) -> Result<()> {
        let data_dir = self.data_dir();
        if !data_dir.is_dir() {
            return Err(layout_error::data_dir_not_found(&data_dir));
        }
        let preamble = self.preamble_path();
        if !preamble.is_file() {
            return Err(layout_error::preamble_not_found(&preamble));
        }
        Ok(())
    }
}
