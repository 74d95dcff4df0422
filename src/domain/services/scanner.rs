//! Directive scanner
//!
//! Walks the source tree once per run and keeps every text file with at
//! least one directive-shaped line. Content is not retained; transformation
//! reads files again, so the whole tree is never held in memory.

use std::path::Path;

use crate::domain::entities::{FileFailure, SourceFile};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ExcludePatterns;
use crate::error::{SpellError, SpellResult};

use super::binary::is_binary_path;
use super::directive::DirectivePattern;

/// Result of one scan
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Directive-bearing files, in walk order
    pub sources: Vec<SourceFile>,
    /// Files that could not be read (only populated when not stopping on error)
    pub failures: Vec<FileFailure>,
    /// Regular files visited, including skipped ones
    pub visited: usize,
}

/// Finds source files that contain directives
pub struct DirectiveScanner<'a> {
    fs: &'a dyn FileSystem,
    project_root: &'a Path,
    pattern: &'a DirectivePattern,
    exclude: &'a ExcludePatterns,
}

impl<'a> DirectiveScanner<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        project_root: &'a Path,
        pattern: &'a DirectivePattern,
        exclude: &'a ExcludePatterns,
    ) -> Self {
        Self {
            fs,
            project_root,
            pattern,
            exclude,
        }
    }

    /// Scan `source_root` depth-first.
    ///
    /// Read failures are logged and skipped unless `stop_on_error` is set, in
    /// which case the first one aborts the scan.
    pub fn scan(&self, source_root: &Path, stop_on_error: bool) -> SpellResult<ScanReport> {
        let mut report = ScanReport::default();

        if !self.fs.is_dir(source_root) {
            tracing::warn!(root = %source_root.display(), "source root does not exist; nothing to scan");
            return Ok(report);
        }

        for entry in self.fs.walk(source_root) {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    if stop_on_error {
                        return Err(SpellError::Scan {
                            path: source_root.to_path_buf(),
                            message: e.to_string(),
                        });
                    }
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    report.failures.push(FileFailure::new(source_root, &e));
                    continue;
                }
            };
            report.visited += 1;

            let relative = path.strip_prefix(self.project_root).unwrap_or(&path);
            if is_binary_path(&path) || self.exclude.is_excluded(relative) {
                continue;
            }

            let content = match self.fs.read(&path) {
                Ok(content) => content,
                Err(e) => {
                    if stop_on_error {
                        return Err(SpellError::FileRead {
                            path: path.clone(),
                            message: e.to_string(),
                        });
                    }
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable source");
                    report.failures.push(FileFailure::new(&path, &e));
                    continue;
                }
            };

            let directives = self.pattern.find_directives(&content);
            if directives.is_empty() {
                continue;
            }

            tracing::debug!(path = %relative.display(), directives = directives.len(), "directive source");
            report.sources.push(SourceFile::new(
                path.clone(),
                relative.to_path_buf(),
                content.lines().count(),
                directives,
            ));
        }

        Ok(report)
    }
}
