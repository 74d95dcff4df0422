//! Outcome of evaluating one line against the directive grammar

/// What should happen to a single line (or its whole file)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Leave the line as written
    #[default]
    Keep,
    /// Swap the line for new text (terminator is preserved by the caller)
    Replace(String),
    /// Drop the line, including its terminator
    RemoveLine,
    /// Delete the whole output file
    RemoveFile,
}

impl Outcome {
    pub fn replace(text: impl Into<String>) -> Self {
        Outcome::Replace(text.into())
    }

    pub fn removes_file(&self) -> bool {
        matches!(self, Outcome::RemoveFile)
    }

    pub fn removes_line(&self) -> bool {
        matches!(self, Outcome::RemoveLine)
    }

    /// Replacement text, if any
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Outcome::Replace(text) => Some(text),
            _ => None,
        }
    }
}
