//! Shipped content layout and enumeration
//!
//! This module handles:
//! - Resolving the directory the curated content ships in
//! - The fixed category set and its directory names
//! - Enumerating content entries for display

pub mod frontmatter;

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AgentpackError, Result};

/// Workspace-side configuration root receiving all content
pub const CONFIG_DIR: &str = ".github";

/// Standalone document copied next to the category subtrees
pub const STANDALONE_DOC: &str = "copilot-instructions.md";

/// Manifest file that marks a directory as a skill
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// Placeholder kept in otherwise empty shipped directories
const PLACEHOLDER_FILE: &str = ".gitkeep";

/// The four content categories, each a named subtree in both the
/// content dir and the workspace config root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Agents,
    Skills,
    Prompts,
    Instructions,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Agents,
        Category::Skills,
        Category::Prompts,
        Category::Instructions,
    ];

    /// Subtree name, identical on the source and destination side
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Agents => "agents",
            Category::Skills => "skills",
            Category::Prompts => "prompts",
            Category::Instructions => "instructions",
        }
    }

    /// Heading used in console output
    pub fn label(self) -> &'static str {
        match self {
            Category::Agents => "Agents",
            Category::Skills => "Skills",
            Category::Prompts => "Prompts",
            Category::Instructions => "Instructions",
        }
    }
}

/// Resolve the directory the curated content ships in.
///
/// An explicit override (flag or environment) must point at an existing
/// directory. Without one, the `content/` directory next to the current
/// executable is used — the content ships alongside the tool.
pub fn resolve_content_dir(overridden: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = overridden {
        if dir.is_dir() {
            return Ok(dunce::canonicalize(&dir).unwrap_or(dir));
        }
        return Err(AgentpackError::ContentDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let exe_adjacent = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("content")));

    match exe_adjacent {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(AgentpackError::ContentDirNotFound {
            path: dir.display().to_string(),
        }),
        None => Err(AgentpackError::ContentDirNotFound {
            path: "content".to_string(),
        }),
    }
}

/// True when a category subtree ships something worth installing:
/// at least one file that is not a placeholder.
pub fn has_installable_content(dir: &Path) -> bool {
    if !dir.is_dir() {
        return false;
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .any(|e| e.file_name() != PLACEHOLDER_FILE)
}

/// A content entry shown by the list command
#[derive(Debug, Clone)]
pub struct ContentEntry {
    /// Display name (file stem, or skill directory name)
    pub name: String,
    /// Description from the document's frontmatter, when present
    pub description: Option<String>,
}

/// Enumerate the entries a category ships, sorted by name.
///
/// Skills are one directory per skill, identified by their manifest;
/// every other category is a tree of markdown documents.
pub fn entries_for(content_dir: &Path, category: Category) -> Result<Vec<ContentEntry>> {
    let dir = content_dir.join(category.dir_name());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    match category {
        Category::Skills => skill_entries(&dir),
        _ => markdown_entries(&dir),
    }
}

/// Immediate subdirectories holding a skill manifest
fn skill_entries(dir: &Path) -> Result<Vec<ContentEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AgentpackError::FileReadFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })? {
        let entry = entry?;
        let manifest = entry.path().join(SKILL_MANIFEST);
        if !entry.path().is_dir() || !manifest.is_file() {
            continue;
        }
        entries.push(ContentEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            description: read_description(&manifest)?,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Markdown documents anywhere under the category subtree
fn markdown_entries(dir: &Path) -> Result<Vec<ContentEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let is_md = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if !is_md {
            continue;
        }
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        entries.push(ContentEntry {
            name,
            description: read_description(path)?,
        });
    }
    Ok(entries)
}

fn read_description(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| AgentpackError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(frontmatter::parse(&content).and_then(|fm| fm.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Agents.dir_name(), "agents");
        assert_eq!(Category::Skills.dir_name(), "skills");
        assert_eq!(Category::Prompts.dir_name(), "prompts");
        assert_eq!(Category::Instructions.dir_name(), "instructions");
        assert_eq!(Category::ALL.len(), 4);
    }

    #[test]
    fn test_resolve_content_dir_with_override() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_content_dir(Some(temp.path().to_path_buf())).unwrap();
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_content_dir_missing_override_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = resolve_content_dir(Some(missing)).unwrap_err();
        assert!(matches!(err, AgentpackError::ContentDirNotFound { .. }));
    }

    #[test]
    fn test_has_installable_content() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agents");

        assert!(!has_installable_content(&dir));

        fs::create_dir_all(&dir).unwrap();
        assert!(!has_installable_content(&dir));

        write(&dir.join(".gitkeep"), "");
        assert!(!has_installable_content(&dir));

        write(&dir.join("reviewer.md"), "# Reviewer");
        assert!(has_installable_content(&dir));
    }

    #[test]
    fn test_skill_entries_require_manifest() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("skills/code-debugging/SKILL.md"),
            "---\ndescription: Structured debugging\n---\n\nBody",
        );
        write(&temp.path().join("skills/not-a-skill/notes.md"), "# Notes");

        let entries = entries_for(temp.path(), Category::Skills).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "code-debugging");
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Structured debugging")
        );
    }

    #[test]
    fn test_markdown_entries_are_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("prompts/zeta.md"), "# Z");
        write(&temp.path().join("prompts/alpha.md"), "# A");
        write(&temp.path().join("prompts/notes.txt"), "not markdown");

        let entries = entries_for(temp.path(), Category::Prompts).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_entries_for_missing_category_dir() {
        let temp = TempDir::new().unwrap();
        let entries = entries_for(temp.path(), Category::Agents).unwrap();
        assert!(entries.is_empty());
    }
}
