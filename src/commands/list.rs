//! List command implementation
//!
//! Read-only: prints the shipped content names per category without
//! touching the workspace.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::content::{self, Category};
use crate::error::Result;

/// Run list command
pub fn run(content_dir: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let content_dir = content::resolve_content_dir(content_dir)?;

    let mut shipped_anything = false;
    for category in Category::ALL {
        let entries = content::entries_for(&content_dir, category)?;
        if entries.is_empty() {
            continue;
        }
        shipped_anything = true;

        println!(
            "{} ({}):",
            Style::new().bold().yellow().apply_to(category.label()),
            entries.len()
        );
        for entry in &entries {
            match (&entry.description, args.detailed) {
                (Some(description), true) => {
                    println!(
                        "  {}  {}",
                        entry.name,
                        Style::new().dim().apply_to(description)
                    );
                }
                _ => println!("  {}", entry.name),
            }
        }
        println!();
    }

    if !shipped_anything {
        println!("No content shipped.");
    }

    Ok(())
}
