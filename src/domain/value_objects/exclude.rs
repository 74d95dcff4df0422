//! Exclusion patterns for the directive scanner
//!
//! Files matched here are never treated as data, even if they contain
//! directive-shaped comments. The usual candidates are the evaluator's own
//! grammar definitions and fixtures. Patterns use gitignore semantics and
//! come from `source.exclude` in the config plus an optional `.spellignore`.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project exclusion file
pub const SPELLIGNORE_FILE: &str = ".spellignore";

/// Maximum file size for `.spellignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled exclusion matcher rooted at the project directory
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// A pattern set that excludes nothing
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Build from configured patterns plus `<project_root>/.spellignore`, if present
    pub fn load(project_root: &Path, configured: &[String]) -> Result<Self, ExcludeError> {
        let mut builder = GitignoreBuilder::new(project_root);
        let mut pattern_count = 0;

        for (idx, pattern) in configured.iter().enumerate() {
            add_pattern(&mut builder, &mut pattern_count, None, idx + 1, pattern)?;
        }

        let ignore_path = project_root.join(SPELLIGNORE_FILE);
        if ignore_path.is_file() {
            let metadata = fs::metadata(&ignore_path)?;
            if metadata.len() > MAX_FILE_SIZE {
                return Err(ExcludeError::FileTooLarge {
                    path: ignore_path,
                    size: metadata.len(),
                    limit: MAX_FILE_SIZE,
                });
            }
            let content = fs::read_to_string(&ignore_path)?;
            for (line_num, line) in content.lines().enumerate() {
                add_pattern(
                    &mut builder,
                    &mut pattern_count,
                    Some(&ignore_path),
                    line_num + 1,
                    line,
                )?;
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check a path relative to the project root
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        // Rooted paths lie outside the project root; the matcher asserts on them.
        if self.pattern_count == 0 || rel_path.has_root() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, false)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

fn add_pattern(
    builder: &mut GitignoreBuilder,
    pattern_count: &mut usize,
    origin: Option<&Path>,
    line: usize,
    pattern: &str,
) -> Result<(), ExcludeError> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    *pattern_count += 1;
    if *pattern_count > MAX_PATTERNS {
        return Err(ExcludeError::TooManyPatterns {
            count: *pattern_count,
            limit: MAX_PATTERNS,
        });
    }

    builder
        .add_line(origin.map(Path::to_path_buf), trimmed)
        .map_err(|e| ExcludeError::InvalidPattern {
            origin: origin
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "source.exclude".to_string()),
            line,
            pattern: trimmed.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

/// Errors that can occur when loading exclusion patterns
#[derive(Debug, Error)]
pub enum ExcludeError {
    #[error(".spellignore exceeds {}KB limit ({size} bytes): {}", limit / 1024, path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{count} exclusion patterns exceed the {limit} limit")]
    TooManyPatterns { count: usize, limit: usize },

    #[error("invalid pattern at {origin}:{line}: '{pattern}' - {message}")]
    InvalidPattern {
        origin: String,
        line: usize,
        pattern: String,
        message: String,
    },

    #[error("failed to build exclusion matcher: {0}")]
    BuildFailed(String),

    #[error("IO error reading .spellignore: {0}")]
    Io(#[from] std::io::Error),
}
