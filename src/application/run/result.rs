//! Run Result
//!
//! Result types for a spell run.

use std::path::PathBuf;

use crate::domain::entities::FileFailure;
use crate::domain::services::{FileChange, FileReport};

/// Result of a spell run
///
/// Append-only while the run is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Every output file that was transformed, in processing order
    pub processed_files: Vec<PathBuf>,
    /// Sum of per-file spell counts (approximate; see `DirectivePattern::count`)
    pub total_spells_processed: usize,
    /// Files whose content changed
    pub rewritten: Vec<PathBuf>,
    /// Files removed by a remove-file directive
    pub deleted: Vec<PathBuf>,
    /// Files that were skipped because of an error
    pub failures: Vec<FileFailure>,
}

impl RunResult {
    pub fn new() -> Self {
        Self {
            processed_files: Vec::new(),
            total_spells_processed: 0,
            rewritten: Vec::new(),
            deleted: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.rewritten.is_empty() || !self.deleted.is_empty()
    }

    /// Record one transformed file
    pub fn record(&mut self, report: &FileReport) {
        self.processed_files.push(report.path.clone());
        self.total_spells_processed += report.spell_count;
        match report.change {
            FileChange::Rewritten => self.rewritten.push(report.path.clone()),
            FileChange::Deleted => self.deleted.push(report.path.clone()),
            FileChange::Unchanged => {}
        }
    }

    /// Append another result after this one
    pub fn merge(&mut self, other: RunResult) {
        self.processed_files.extend(other.processed_files);
        self.total_spells_processed += other.total_spells_processed;
        self.rewritten.extend(other.rewritten);
        self.deleted.extend(other.deleted);
        self.failures.extend(other.failures);
    }
}

impl Default for RunResult {
    fn default() -> Self {
        Self::new()
    }
}
