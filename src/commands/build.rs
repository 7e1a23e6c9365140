//! Build command implementation
//!
//! Compiles every ready unit under data/ into output/, or, with --dry-run,
//! reports what a build pass would do without writing anything.

use std::path::PathBuf;

use crate::cli::BuildArgs;
use crate::concat::{Concatenator, Layout, UnitStatus};
use crate::error::Result;

/// Run build command
pub fn run(root: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let root = super::helpers::resolve_root(root)?;
    if verbose {
        println!("Project root: {}", root.display());
    }

    let concatenator = Concatenator::new(Layout::new(root));

    if args.dry_run {
        return dry_run(&concatenator);
    }

    let summary = concatenator.build()?;
    println!();
    println!(
        "{} created, {} skipped, {} failed",
        summary.created, summary.skipped, summary.failed
    );
    Ok(())
}

/// Report what a build pass would create, without touching the filesystem.
fn dry_run(concatenator: &Concatenator) -> Result<()> {
    for (unit, status) in concatenator.scan()? {
        match status {
            UnitStatus::Ready => {
                let artifact = concatenator.layout().artifact_path(unit.name());
                println!("Would create {}", concatenator.display_path(&artifact));
            }
            UnitStatus::Missing(missing) => {
                println!("Skipping {} (missing {} file)", unit.name(), missing);
            }
        }
    }
    Ok(())
}
