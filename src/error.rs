//! Error types and handling for Agentpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Two error classes exist by design: expected conditions (a content
//! category that does not ship, a destination file that already exists)
//! are resolved by policy and reported, never raised; filesystem failures
//! are fatal and abort the current run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Agentpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentpackError {
    // Content source errors
    #[error("Content directory not found: {path}")]
    #[diagnostic(
        code(agentpack::content::not_found),
        help(
            "Pass --content-dir or set AGENTPACK_CONTENT_DIR to the directory holding the shipped content"
        )
    )]
    ContentDirNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(agentpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(agentpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgentpackError {
    fn from(err: std::io::Error) -> Self {
        AgentpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentpackError>;
