//! Install command implementation
//!
//! The orchestrator: turns parsed arguments into guard and installer
//! calls and renders the summary. The installation process:
//! 1. Resolve the workspace root and the shipped-content directory
//! 2. In unattended mode, consult the idempotency guard
//! 3. Synchronize each selected category into the workspace
//! 4. Copy the standalone document if it is absent
//! 5. Report copied and skipped files
//!
//! All per-file decisions live in the sync engine and its conflict
//! policy; this command never inspects destination files itself.

use std::path::PathBuf;

use console::Style;

use crate::cli::InstallArgs;
use crate::content;
use crate::error::{AgentpackError, Result};
use crate::installer::Installer;
use crate::progress;
use crate::sync::{self, OnConflict, SyncReport};

/// Run install command
pub fn run(
    workspace: Option<PathBuf>,
    content_dir: Option<PathBuf>,
    verbose: bool,
    args: InstallArgs,
) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace)?;
    let content_dir = content::resolve_content_dir(content_dir)?;
    let installer = Installer::new(&content_dir, &workspace_root);

    if args.auto && !sync::should_auto_install(installer.config_root()) {
        println!("Content already installed; nothing to do.");
        return Ok(());
    }

    let on_conflict = if args.merge {
        OnConflict::Merge
    } else {
        OnConflict::Skip
    };

    let mut report = SyncReport::default();
    for category in args.selected_categories() {
        let pb = progress::category_spinner(args.auto, category.label());
        let category_report = installer.install_category(category, on_conflict);
        progress::finish_spinner(pb);
        report.absorb(category_report?);
    }
    report.absorb(installer.install_standalone_doc()?);

    render_summary(&report, verbose);

    Ok(())
}

/// Resolve the workspace root from the CLI argument or the current
/// directory, canonicalized once and threaded explicitly from here on.
fn resolve_workspace_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let root = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| AgentpackError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };
    Ok(dunce::canonicalize(&root).unwrap_or(root))
}

/// Print counts and paths for copied vs. skipped files
fn render_summary(report: &SyncReport, verbose: bool) {
    if report.is_empty() {
        println!("Nothing to install.");
        return;
    }

    println!(
        "Installed {} file(s), skipped {} existing file(s)",
        report.copied.len(),
        report.skipped.len()
    );

    if !report.copied.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Installed:"));
        for path in &report.copied {
            println!(
                "  {} {}",
                Style::new().green().apply_to("+"),
                path.display()
            );
        }
    }

    if verbose && !report.skipped.is_empty() {
        println!();
        println!(
            "{}",
            Style::new().bold().apply_to("Skipped (already present):")
        );
        for path in &report.skipped {
            println!("    {}", Style::new().dim().apply_to(path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_workspace_root_explicit() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_workspace_root(Some(temp.path().to_path_buf())).unwrap();
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_workspace_root_nonexistent_passes_through() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("not-yet-created");
        let resolved = resolve_workspace_root(Some(missing.clone())).unwrap();
        assert_eq!(resolved, missing);
    }
}
