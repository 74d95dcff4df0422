//! Per-file transformation
//!
//! Two phases, always in this order:
//!
//! 1. **Refresh** - when enabled, the matching source's content replaces the
//!    output's content as the input of phase 2, so directives are evaluated
//!    against the latest authored text rather than a stale build.
//! 2. **Directives** - lines are evaluated from last to first. A remove-file
//!    outcome stops evaluation and deletes the file; otherwise the rebuilt
//!    content is written only if it differs from what is on disk.
//!
//! Skipping the write when nothing changed makes a second run a no-op on disk.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::domain::ports::{DirectiveEvaluator, EvalContext, FileSystem};
use crate::domain::value_objects::Outcome;
use crate::error::{SpellError, SpellResult};

use super::binary::is_binary_path;
use super::directive::DirectivePattern;

/// Options for a single file transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Refresh the output from its source before evaluating directives
    pub copy_from_source: bool,
    /// Compute everything but never write or delete
    pub dry_run: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            copy_from_source: true,
            dry_run: false,
        }
    }
}

/// What happened to an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    Rewritten,
    Unchanged,
    Deleted,
}

/// Per-file result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub change: FileChange,
    /// Directive-shaped lines left in the final content (0 when deleted)
    pub spell_count: usize,
    /// Source the content was refreshed from, if any
    pub refreshed_from: Option<PathBuf>,
}

/// A line and its terminator (`""`, `"\n"` or `"\r\n"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub terminator: &'a str,
}

impl<'a> Line<'a> {
    /// The line exactly as it appears in the file
    pub fn raw(&self) -> Cow<'a, str> {
        if self.terminator.is_empty() {
            Cow::Borrowed(self.text)
        } else {
            Cow::Owned(format!("{}{}", self.text, self.terminator))
        }
    }
}

/// Split content into lines, keeping each terminator
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split_inclusive('\n')
        .map(|raw| {
            let text = raw
                .strip_suffix('\n')
                .map(|t| t.strip_suffix('\r').unwrap_or(t))
                .unwrap_or(raw);
            Line {
                text,
                terminator: &raw[text.len()..],
            }
        })
        .collect()
}

/// Result of applying directives to a file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Some line asked for the whole file to be removed
    DeleteFile { line_index: usize },
    /// Rebuilt content
    Content(String),
}

/// Evaluate every line from last to first and rebuild the content.
///
/// Each line is evaluated at its original position, so removals never shift
/// the indexes the evaluator sees. An evaluator error leaves the line as is.
pub fn apply_directives(
    content: &str,
    file_path: &Path,
    evaluator: &dyn DirectiveEvaluator,
) -> Applied {
    let lines = split_lines(content);
    let mut kept: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());

    for (line_index, line) in lines.iter().enumerate().rev() {
        let context = EvalContext {
            file_path,
            line_index,
        };
        let outcome = match evaluator.evaluate(line.text, &context) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    path = %file_path.display(),
                    line = line_index + 1,
                    error = %e,
                    "directive evaluation failed; line left unchanged"
                );
                Outcome::Keep
            }
        };

        match outcome {
            Outcome::RemoveFile => return Applied::DeleteFile { line_index },
            Outcome::RemoveLine => {}
            Outcome::Replace(text) => kept.push(Cow::Owned(text + line.terminator)),
            Outcome::Keep => kept.push(line.raw()),
        }
    }

    Applied::Content(kept.iter().rev().map(|piece| piece.as_ref()).collect())
}

/// Applies directive outcomes to output files
pub struct FileTransformer<'a> {
    fs: &'a dyn FileSystem,
    evaluator: &'a dyn DirectiveEvaluator,
    pattern: &'a DirectivePattern,
    options: TransformOptions,
}

impl<'a> FileTransformer<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        evaluator: &'a dyn DirectiveEvaluator,
        pattern: &'a DirectivePattern,
        options: TransformOptions,
    ) -> Self {
        Self {
            fs,
            evaluator,
            pattern,
            options,
        }
    }

    /// Transform one output file.
    ///
    /// `find_source` locates the single best source for the output; it is
    /// only consulted when refreshing is enabled.
    pub fn transform<F>(&self, output: &Path, find_source: F) -> SpellResult<FileReport>
    where
        F: Fn(&Path) -> Option<PathBuf>,
    {
        if is_binary_path(output) {
            tracing::debug!(path = %output.display(), "binary output left untouched");
            return Ok(FileReport {
                path: output.to_path_buf(),
                change: FileChange::Unchanged,
                spell_count: 0,
                refreshed_from: None,
            });
        }

        let on_disk = self.fs.read(output).map_err(|e| SpellError::FileRead {
            path: output.to_path_buf(),
            message: e.to_string(),
        })?;

        let refreshed = if self.options.copy_from_source {
            match find_source(output) {
                Some(source) if source != output => {
                    let content = self.fs.read(&source).map_err(|e| SpellError::FileRead {
                        path: source.clone(),
                        message: e.to_string(),
                    })?;
                    Some((source, content))
                }
                _ => None,
            }
        } else {
            None
        };
        let input = refreshed
            .as_ref()
            .map(|(_, content)| content.as_str())
            .unwrap_or(&on_disk);
        let refreshed_from = refreshed.as_ref().map(|(source, _)| source.clone());

        match apply_directives(input, output, self.evaluator) {
            Applied::DeleteFile { line_index } => {
                tracing::debug!(path = %output.display(), line = line_index + 1, "remove-file directive");
                if !self.options.dry_run {
                    self.fs.remove(output).map_err(|e| SpellError::FileWrite {
                        path: output.to_path_buf(),
                        message: e.to_string(),
                    })?;
                }
                Ok(FileReport {
                    path: output.to_path_buf(),
                    change: FileChange::Deleted,
                    spell_count: 0,
                    refreshed_from,
                })
            }
            Applied::Content(content) => {
                let spell_count = self.pattern.count(&content);
                let change = if content == on_disk {
                    FileChange::Unchanged
                } else {
                    if !self.options.dry_run {
                        self.fs.write(output, &content).map_err(|e| SpellError::FileWrite {
                            path: output.to_path_buf(),
                            message: e.to_string(),
                        })?;
                    }
                    FileChange::Rewritten
                };
                tracing::debug!(path = %output.display(), ?change, spell_count, "transformed");
                Ok(FileReport {
                    path: output.to_path_buf(),
                    change,
                    spell_count,
                    refreshed_from,
                })
            }
        }
    }
}
