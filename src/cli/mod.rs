//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod list;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;

/// Ultrac - per-directory artifact compiler
///
/// Compile pairs of YAML and text sources into `.ultra` artifacts, each
/// prefixed with the shared `common.yaml` preamble.
#[derive(Parser, Debug)]
#[command(
    name = "ultrac",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Compile per-directory YAML and text sources into .ultra artifacts",
    long_about = "Ultrac scans the data/ directory under the project root and, for every \
                  subdirectory that holds both <name>.yaml and <name>.txt, writes \
                  output/<name>.ultra: the shared data/common.yaml preamble and the unit's \
                  YAML wrapped in --- delimiters, followed by the unit's text.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ultrac                      \x1b[90m# Build all units (same as 'ultrac build')\x1b[0m\n   \
                  ultrac build --dry-run      \x1b[90m# Show what would be built without writing\x1b[0m\n   \
                  ultrac list                 \x1b[90m# List units and their status\x1b[0m\n   \
                  ultrac -r ./project build   \x1b[90m# Build against an explicit project root\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to the directory containing the executable)
    #[arg(long, short = 'r', global = true, env = "ULTRAC_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile all units into .ultra artifacts (the default)
    Build(BuildArgs),

    /// List units and their status without writing anything
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
