//! Common test utilities for Agentpack integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace paired with its own shipped-content directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory holding both trees
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the workspace root receiving content
    pub path: PathBuf,
    /// Path to the content directory the tool installs from
    pub content_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with an empty content directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("workspace");
        let content_dir = temp.path().join("content");
        std::fs::create_dir_all(&path).expect("Failed to create workspace directory");
        std::fs::create_dir_all(&content_dir).expect("Failed to create content directory");
        Self {
            temp,
            path,
            content_dir,
        }
    }

    /// Write a file under the shipped-content directory
    pub fn write_content(&self, path: &str, content: &str) {
        write(&self.content_dir.join(path), content);
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the real agentpack binary, wired to this workspace
    /// and its content directory through the environment
    #[allow(deprecated)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("agentpack").expect("binary builds");
        cmd.env("AGENTPACK_CONTENT_DIR", &self.content_dir);
        cmd.env("AGENTPACK_WORKSPACE", &self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
