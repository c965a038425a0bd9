//! Agentpack - curated AI workspace content installer
//!
//! Copies shipped agent, skill, prompt and instruction documents into a
//! project's .github/ directory without touching anything the project
//! already customized. Existing files are skipped (or append-merged for
//! markdown when asked); nothing is ever deleted.

use clap::Parser;

mod cli;
mod commands;
mod content;
mod error;
mod installer;
mod progress;
mod sync;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => {
            commands::install::run(cli.workspace, cli.content_dir, cli.verbose, args)
        }
        Commands::List(args) => commands::list::run(cli.content_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
