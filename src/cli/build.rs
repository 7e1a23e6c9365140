use clap::Parser;

/// Arguments for the build command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Build all units:\n    ultrac build\n\n\
                  Show what would be built without writing:\n    ultrac build --dry-run")]
pub struct BuildArgs {
    /// Report what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
