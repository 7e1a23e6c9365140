//! Ultrac - per-directory artifact compiler
//!
//! A command line tool that compiles pairs of YAML and text sources found
//! per-directory under data/ into single .ultra artifacts, each prefixed
//! with the shared common.yaml preamble.

use clap::Parser;

mod cli;
mod commands;
mod concat;
mod error;

use cli::{BuildArgs, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // No subcommand means a plain build, matching the original
    // zero-argument invocation.
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()));

    let result = match command {
        Commands::Build(args) => commands::build::run(cli.root, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
