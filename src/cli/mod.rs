//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// Agentpack - curated AI workspace content installer
///
/// Distributes shipped agent, skill, prompt and instruction documents into a
/// project workspace without touching anything the project already customized.
#[derive(Parser, Debug)]
#[command(
    name = "agentpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for curated AI workspace content",
    long_about = "Agentpack copies curated agent, skill, prompt and instruction documents \
                  into a project's .github/ directory. Existing files are never overwritten; \
                  conflicts are skipped (or append-merged for markdown when asked).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agentpack install                      \x1b[90m# Install every category\x1b[0m\n   \
                  agentpack install --skills --prompts   \x1b[90m# Install selected categories\x1b[0m\n   \
                  agentpack install --merge              \x1b[90m# Append new markdown sections to existing files\x1b[0m\n   \
                  agentpack install --auto               \x1b[90m# Unattended install, no-op if content is already present\x1b[0m\n   \
                  agentpack list                         \x1b[90m# List shipped content without installing\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory receiving the content (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "AGENTPACK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory the curated content ships in (defaults to content/ next to the executable)
    #[arg(long, global = true, env = "AGENTPACK_CONTENT_DIR", value_name = "PATH")]
    pub content_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install shipped content into the workspace
    Install(InstallArgs),

    /// List shipped content without installing anything
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["agentpack", "install"]).unwrap();
        assert!(matches!(cli.command, Commands::Install(_)));
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["agentpack", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["agentpack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "agentpack",
            "-v",
            "-w",
            "/tmp/workspace",
            "--content-dir",
            "/opt/agentpack/content",
            "install",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
        assert_eq!(
            cli.content_dir,
            Some(PathBuf::from("/opt/agentpack/content"))
        );
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["agentpack", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
