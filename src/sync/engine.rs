//! Recursive tree synchronization
//!
//! Mirrors a read-only source directory into a mutable destination
//! directory, consulting the conflict policy once per file. The engine
//! is additive-only: outside the merge disposition's append behavior it
//! never deletes or truncates anything at the destination.

use std::fs;
use std::path::{Path, PathBuf};

use super::policy::{self, Disposition, OnConflict};
use crate::error::{AgentpackError, Result};

/// Destination paths touched or deliberately left alone during one run
#[derive(Debug, Default, Clone)]
pub struct SyncReport {
    /// Files written at the destination (new copies and merges)
    pub copied: Vec<PathBuf>,
    /// Files left untouched because the destination already had them
    pub skipped: Vec<PathBuf>,
}

impl SyncReport {
    /// Fold another report into this one, preserving order
    pub fn absorb(&mut self, other: SyncReport) {
        self.copied.extend(other.copied);
        self.skipped.extend(other.skipped);
    }

    pub fn is_empty(&self) -> bool {
        self.copied.is_empty() && self.skipped.is_empty()
    }
}

/// Mirror `source_root` into `dest_root` under the given conflict mode.
///
/// The destination root and its missing ancestors are created
/// unconditionally. A missing source root yields an empty report;
/// shipped content categories are optional and their absence is not an
/// error. Filesystem failures propagate and abort the remainder of the
/// walk; partial results are lost, which is acceptable because a re-run
/// re-skips everything already copied.
pub fn synchronize(
    source_root: &Path,
    dest_root: &Path,
    on_conflict: OnConflict,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    fs::create_dir_all(dest_root).map_err(|e| AgentpackError::FileWriteFailed {
        path: dest_root.display().to_string(),
        reason: e.to_string(),
    })?;

    if !source_root.exists() {
        return Ok(report);
    }

    sync_dir(source_root, dest_root, on_conflict, &mut report)?;
    Ok(report)
}

/// Recurse over one directory level. Entries are visited sorted by file
/// name so reports come out deterministic across platforms.
fn sync_dir(
    source: &Path,
    dest: &Path,
    on_conflict: OnConflict,
    report: &mut SyncReport,
) -> Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(source)
        .map_err(|e| AgentpackError::FileReadFailed {
            path: source.display().to_string(),
            reason: e.to_string(),
        })?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let source_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if source_path.is_dir() {
            fs::create_dir_all(&dest_path).map_err(|e| AgentpackError::FileWriteFailed {
                path: dest_path.display().to_string(),
                reason: e.to_string(),
            })?;
            sync_dir(&source_path, &dest_path, on_conflict, report)?;
        } else {
            sync_file(&source_path, &dest_path, on_conflict, report)?;
        }
    }

    Ok(())
}

/// Synchronize a single file through the conflict policy
fn sync_file(
    source: &Path,
    dest: &Path,
    on_conflict: OnConflict,
    report: &mut SyncReport,
) -> Result<()> {
    let incoming = fs::read(source).map_err(|e| AgentpackError::FileReadFailed {
        path: source.display().to_string(),
        reason: e.to_string(),
    })?;

    let existing = if dest.exists() {
        Some(fs::read(dest).map_err(|e| AgentpackError::FileReadFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?)
    } else {
        None
    };

    let disposition = policy::decide(
        on_conflict,
        existing.as_deref(),
        &incoming,
        is_markdown(source),
    );
    apply_disposition(dest, &incoming, disposition, report)
}

/// Carry out one disposition at the destination path
fn apply_disposition(
    dest: &Path,
    incoming: &[u8],
    disposition: Disposition,
    report: &mut SyncReport,
) -> Result<()> {
    match disposition {
        Disposition::CopyNew | Disposition::Overwrite => {
            write_bytes(dest, incoming)?;
            report.copied.push(dest.to_path_buf());
        }
        Disposition::Merge(content) => {
            write_bytes(dest, &content)?;
            report.copied.push(dest.to_path_buf());
        }
        Disposition::Skip => {
            report.skipped.push(dest.to_path_buf());
        }
    }
    Ok(())
}

fn write_bytes(dest: &Path, content: &[u8]) -> Result<()> {
    fs::write(dest, content).map_err(|e| AgentpackError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
