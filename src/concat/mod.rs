//! The Concatenator: compile per-directory YAML + text pairs into `.ultra`
//! artifacts, each prefixed with the shared `common.yaml` preamble.
//!
//! This module is organized into submodules:
//! - [`layout`]: well-known paths under the project root
//! - [`discovery`]: enumeration of candidate unit directories
//! - [`unit`]: the unit type and its source-file status
//! - [`compose`]: the artifact byte layout
//! - [`writer`]: output-directory creation and artifact writes

pub mod compose;
pub mod discovery;
pub mod layout;
pub mod unit;
pub mod writer;

pub use layout::Layout;
pub use unit::{Unit, UnitStatus};

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Counts of what a build pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Compiles every ready unit under `data/` into an artifact under `output/`.
///
/// Units are independent: a failing unit is reported and processing moves on
/// to the next one. Only a missing data directory or a missing preamble abort
/// the run, before anything is written.
pub struct Concatenator {
    layout: Layout,
}

impl Concatenator {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run a full build pass, printing per-unit diagnostics to stdout.
    pub fn build(&self) -> Result<BuildSummary> {
        self.layout.check()?;

        let preamble = read_source(&self.layout.preamble_path())?;
        writer::ensure_output_dir(&self.layout.output_dir())?;

        let units = discovery::discover_units(&self.layout.data_dir())?;

        let mut summary = BuildSummary::default();
        for unit in &units {
            match unit.status() {
                UnitStatus::Missing(missing) => {
                    println!("Skipping {} (missing {} file)", unit.name(), missing);
                    summary.skipped += 1;
                }
                UnitStatus::Ready => {
                    println!("Processing {}...", unit.name());
                    match self.build_unit(unit, &preamble) {
                        Ok(artifact) => {
                            println!("Created {}", self.display_path(&artifact));
                            summary.created += 1;
                        }
                        Err(e) => {
                            println!("Error processing {}: {}", unit.name(), e);
                            summary.failed += 1;
                        }
                    }
                }
            }
        }

        Ok(summary)
    }

    /// Read-only pass: every unit with its status, nothing written.
    pub fn scan(&self) -> Result<Vec<(Unit, UnitStatus)>> {
        self.layout.check()?;

        let units = discovery::discover_units(&self.layout.data_dir())?;
        Ok(units
            .into_iter()
            .map(|unit| {
                let status = unit.status();
                (unit, status)
            })
            .collect())
    }

    fn build_unit(&self, unit: &Unit, preamble: &str) -> Result<PathBuf> {
        let yaml = read_source(&unit.yaml_path())?;
        let txt = read_source(&unit.txt_path())?;

        let content = compose::compose_artifact(preamble, &yaml, &txt);
        let artifact = self.layout.artifact_path(unit.name());
        writer::write_artifact(&artifact, &content)?;
        Ok(artifact)
    }

    /// Render a path relative to the project root where possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.layout.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))
}
