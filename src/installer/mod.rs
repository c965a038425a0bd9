//! Category installation for Agentpack content
//!
//! This module handles:
//! - Mapping each category to its source and destination subtree
//! - Driving the synchronizer once per requested category
//! - The standalone document step
//!
//! The installer makes no policy decisions of its own beyond the fixed
//! category/subtree mapping; per-file conflict handling lives in
//! `sync::policy`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{self, CONFIG_DIR, Category, STANDALONE_DOC};
use crate::error::{AgentpackError, Result};
use crate::sync::{self, OnConflict, SyncReport};

/// Installs shipped content into one workspace
pub struct Installer<'a> {
    /// Directory the curated content ships in
    content_dir: &'a Path,
    /// Workspace-side configuration root receiving the content
    config_root: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(content_dir: &'a Path, workspace_root: &Path) -> Self {
        Self {
            content_dir,
            config_root: workspace_root.join(CONFIG_DIR),
        }
    }

    /// Workspace-side configuration root receiving the content
    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    /// True when the category's source subtree ships installable files
    pub fn category_is_shipped(&self, category: Category) -> bool {
        content::has_installable_content(&self.content_dir.join(category.dir_name()))
    }

    /// Synchronize one category subtree into the workspace.
    ///
    /// A category that ships nothing (missing subtree, or placeholders
    /// only) is skipped entirely; its destination subtree is not
    /// created and the report comes back empty.
    pub fn install_category(
        &self,
        category: Category,
        on_conflict: OnConflict,
    ) -> Result<SyncReport> {
        if !self.category_is_shipped(category) {
            return Ok(SyncReport::default());
        }

        let source = self.content_dir.join(category.dir_name());
        let dest = self.config_root.join(category.dir_name());
        sync::synchronize(&source, &dest, on_conflict)
    }

    /// Copy the standalone document if it is entirely absent at the
    /// destination. Never merged, regardless of the category set or
    /// conflict mode of the surrounding install.
    pub fn install_standalone_doc(&self) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let source = self.content_dir.join(STANDALONE_DOC);
        if !source.is_file() {
            return Ok(report);
        }

        let dest = self.config_root.join(STANDALONE_DOC);
        if dest.exists() {
            report.skipped.push(dest);
            return Ok(report);
        }

        fs::create_dir_all(&self.config_root).map_err(|e| AgentpackError::FileWriteFailed {
            path: self.config_root.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::copy(&source, &dest).map_err(|e| AgentpackError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
        report.copied.push(dest);
        Ok(report)
    }
}
