//! Run Options
//!
//! Configuration types for a spell run.

use std::path::PathBuf;

use crate::domain::services::{CustomPaths, DEFAULT_NAMESPACE};
use crate::domain::value_objects::Layout;

/// Files transformed in parallel within one target
pub const DEFAULT_CONCURRENCY: usize = 4;
/// Targets processed in parallel
pub const DEFAULT_TARGET_CONCURRENCY: usize = 3;
/// Output files scheduled per chunk
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Options for the spell use case
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project root; target identifiers and the source root are relative to it
    pub project_root: PathBuf,
    /// Source and distribution layout
    pub layout: Layout,
    /// Concurrency cap for files within a target
    pub concurrency: usize,
    /// Concurrency cap for targets
    pub target_concurrency: usize,
    /// Output files per scheduling chunk
    pub batch_size: usize,
    /// Abort the run on the first per-file error
    pub stop_on_error: bool,
    /// Refresh outputs from their source before evaluating directives
    pub copy_from_source_before_processing: bool,
    /// Root directory overrides keyed by target identifier
    pub custom_output_paths: CustomPaths,
    /// Extra gitignore-style exclusion patterns for the source scan
    pub exclude: Vec<String>,
    /// Directive namespace (e.g. `@spell:`)
    pub namespace: String,
    /// Compute everything, write nothing
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            layout: Layout::default(),
            concurrency: DEFAULT_CONCURRENCY,
            target_concurrency: DEFAULT_TARGET_CONCURRENCY,
            batch_size: DEFAULT_BATCH_SIZE,
            stop_on_error: false,
            copy_from_source_before_processing: true,
            custom_output_paths: CustomPaths::new(),
            exclude: Vec::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            dry_run: false,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_target_concurrency(mut self, concurrency: usize) -> Self {
        self.target_concurrency = concurrency.max(1);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    pub fn with_copy_from_source(mut self, copy: bool) -> Self {
        self.copy_from_source_before_processing = copy;
        self
    }

    pub fn with_custom_output_path(mut self, target: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.custom_output_paths.insert(target.into(), path.into());
        self
    }

    pub fn with_custom_output_paths(mut self, paths: CustomPaths) -> Self {
        self.custom_output_paths = paths;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute source root
    pub fn source_root(&self) -> PathBuf {
        self.project_root.join(&self.layout.source_root)
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
