//! FileFailure entity - a per-file error that was recorded and skipped

use std::path::PathBuf;

/// A file that could not be scanned or transformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self {
            path: path.into(),
            error: error.to_string(),
        }
    }
}
