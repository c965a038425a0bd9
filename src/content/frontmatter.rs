//! YAML frontmatter parsing for shipped markdown documents

use serde::Deserialize;

/// Metadata fields read from a document's frontmatter block.
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    #[allow(dead_code)] // used in tests
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parse the YAML frontmatter between the first `---` and the next `---`.
/// Returns `None` for documents without a valid frontmatter block.
pub fn parse(content: &str) -> Option<Frontmatter> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")?;
    let frontmatter_str = lines[1..=end_idx].join("\n");
    serde_yaml::from_str(&frontmatter_str).ok()
}
