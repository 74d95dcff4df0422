//! Error types for Spellcaster
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::run::RunResult;

/// Result type alias for Spellcaster operations
pub type SpellResult<T> = Result<T, SpellError>;

/// Main error type for Spellcaster operations
#[derive(Error, Debug)]
pub enum SpellError {
    /// Structurally invalid target list (duplicates, mixed bare/specific library targets)
    #[error("conflicting targets: {message}")]
    Conflict { message: String },

    /// Custom target directory does not exist
    #[error("target '{target}' points to a missing directory: {path}")]
    NotFound { target: String, path: PathBuf },

    /// Malformed target identifier
    #[error("invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// Reading a source or output file failed
    #[error("failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    /// Writing or deleting an output file failed
    #[error("failed to write {path}: {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Walking the source tree failed
    #[error("failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Directive namespace produced an invalid pattern
    #[error("invalid directive pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Exclusion patterns could not be loaded
    #[error(transparent)]
    Exclude(#[from] crate::domain::value_objects::ExcludeError),

    /// Worker pool could not be created
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A per-file failure aborted the run (`stop_on_error`)
    #[error(
        "run aborted after {} processed file(s): {cause}",
        partial.processed_files.len()
    )]
    Aborted {
        partial: RunResult,
        #[source]
        cause: Box<SpellError>,
    },
}

impl SpellError {
    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        SpellError::Conflict {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        SpellError::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Validation errors are raised before any output is touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SpellError::Conflict { .. }
                | SpellError::NotFound { .. }
                | SpellError::InvalidTarget { .. }
        )
    }

    /// Partial result carried by an aborted run
    pub fn partial_result(&self) -> Option<&RunResult> {
        match self {
            SpellError::Aborted { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
