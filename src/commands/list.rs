//! List command implementation
//!
//! This command lists every unit under data/ with its status and, in
//! detailed mode, the source files and the artifact it maps to. It never
//! writes anything.

use console::Style;

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::concat::{Concatenator, Layout, Unit, UnitStatus};
use crate::error::Result;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let root = super::helpers::resolve_root(root)?;
    let concatenator = Concatenator::new(Layout::new(root));

    let scanned = concatenator.scan()?;

    if scanned.is_empty() {
        println!("No units found.");
        return Ok(());
    }

    println!("Units ({}):", scanned.len());
    println!();

    for (unit, status) in &scanned {
        display_unit(&concatenator, unit, status, args.detailed);
        println!();
    }

    Ok(())
}

fn display_unit(concatenator: &Concatenator, unit: &Unit, status: &UnitStatus, detailed: bool) {
    println!("  {}", Style::new().bold().yellow().apply_to(unit.name()));

    match status {
        UnitStatus::Ready => {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Status:"),
                Style::new().green().apply_to("ready")
            );
            let artifact = concatenator.layout().artifact_path(unit.name());
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Artifact:"),
                concatenator.display_path(&artifact)
            );
        }
        UnitStatus::Missing(missing) => {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Status:"),
                Style::new()
                    .red()
                    .apply_to(format!("missing {} file", missing))
            );
        }
    }

    if detailed {
        println!("    {}", Style::new().bold().apply_to("Sources:"));
        display_source(concatenator, unit.yaml_path(), unit.has_yaml());
        display_source(concatenator, unit.txt_path(), unit.has_txt());
    }
}

fn display_source(concatenator: &Concatenator, path: PathBuf, present: bool) {
    let rendered = concatenator.display_path(&path);
    if present {
        println!("      {}", Style::new().dim().apply_to(rendered));
    } else {
        println!(
            "      {} {}",
            Style::new().dim().apply_to(rendered),
            Style::new().red().apply_to("(missing)")
        );
    }
}
