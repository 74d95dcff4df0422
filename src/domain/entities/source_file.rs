//! SourceFile entity - an authored file that carries at least one directive
//!
//! SourceFiles are produced by the scanner and only ever read during a run.

use std::path::{Path, PathBuf};

/// A single directive-shaped line found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 0-based line position in the file
    pub line_index: usize,
    /// The line as written, without its terminator
    pub raw_line: String,
}

impl Directive {
    pub fn new(line_index: usize, raw_line: impl Into<String>) -> Self {
        Self {
            line_index,
            raw_line: raw_line.into(),
        }
    }
}

/// A directive-bearing source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    absolute_path: PathBuf,
    /// Path relative to the project root (e.g. `src/libs/sdk/index.ts`)
    relative_path: PathBuf,
    line_count: usize,
    directives: Vec<Directive>,
}

impl SourceFile {
    pub fn new(
        absolute_path: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        line_count: usize,
        directives: Vec<Directive>,
    ) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            relative_path: relative_path.into(),
            line_count,
            directives,
        }
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// True for `*.d.ts` type declaration files
    pub fn is_declaration(&self) -> bool {
        is_declaration_path(&self.relative_path)
    }
}

/// True if the file name ends in `.d.ts`
pub fn is_declaration_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(".d.ts"))
        .unwrap_or(false)
}
