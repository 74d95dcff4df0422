//! Directive shape recognition
//!
//! Recognises, but does not interpret, directive comments:
//!
//! ```text
//! // @spell:remove-line
//! // @ts-expect-error legacy API @spell:remove-file
//! ```

use regex::Regex;

use crate::domain::entities::Directive;

/// Default directive namespace
pub const DEFAULT_NAMESPACE: &str = "@spell:";

/// Compiled single-line directive matcher
#[derive(Debug, Clone)]
pub struct DirectivePattern {
    namespace: String,
    regex: Regex,
}

impl DirectivePattern {
    pub fn new(namespace: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(
            r"//\s*(?:@ts-expect-error\b.*?\s)?{}[A-Za-z]",
            regex::escape(namespace)
        ))?;
        Ok(Self {
            namespace: namespace.to_string(),
            regex,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// True if the line is directive-shaped
    pub fn is_match(&self, line: &str) -> bool {
        line.contains(&self.namespace) && self.regex.is_match(line)
    }

    /// Byte offset of the directive name in a directive-shaped line
    pub fn name_offset(&self, line: &str) -> Option<usize> {
        if !line.contains(&self.namespace) {
            return None;
        }
        // The match always ends on the single ASCII letter that starts the name.
        self.regex.find(line).map(|m| m.end() - 1)
    }

    /// True if any line of `content` is directive-shaped
    pub fn has_directive(&self, content: &str) -> bool {
        content.lines().any(|line| self.is_match(line))
    }

    /// Every directive-shaped line of `content`
    pub fn find_directives(&self, content: &str) -> Vec<Directive> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| self.is_match(line))
            .map(|(idx, line)| Directive::new(idx, line))
            .collect()
    }

    /// Number of directive-shaped lines.
    ///
    /// Used as the "spells processed" figure after a transformation. It
    /// counts markers left in the final content, not operations applied, so
    /// it is a diagnostic approximation only.
    pub fn count(&self, content: &str) -> usize {
        content.lines().filter(|line| self.is_match(line)).count()
    }
}
