//! Built-in marker evaluator
//!
//! | Directive                 | Outcome                                  |
//! |---------------------------|------------------------------------------|
//! | `@spell:remove-file`      | delete the output                        |
//! | `@spell:remove-line`      | drop the line                            |
//! | `@spell:replace <text>`   | line becomes `<indent><text>`            |
//! | `@spell:keep`             | no change                                |

use crate::domain::ports::{DirectiveEvaluator, EvalContext, EvaluationError};
use crate::domain::services::DirectivePattern;
use crate::domain::value_objects::Outcome;

/// Evaluates the built-in marker directives
#[derive(Debug, Clone)]
pub struct MarkerEvaluator {
    pattern: DirectivePattern,
}

impl MarkerEvaluator {
    /// Evaluator for directives in `namespace`
    pub fn new(namespace: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: DirectivePattern::new(namespace)?,
        })
    }

    pub fn from_pattern(pattern: DirectivePattern) -> Self {
        Self { pattern }
    }
}

impl DirectiveEvaluator for MarkerEvaluator {
    fn evaluate(&self, line: &str, _context: &EvalContext<'_>) -> Result<Outcome, EvaluationError> {
        let Some(offset) = self.pattern.name_offset(line) else {
            return Ok(Outcome::Keep);
        };
        let rest = &line[offset..];
        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        let (name, argument) = rest.split_at(name_len);
        let argument = argument.trim();

        match name {
            "remove-file" => Ok(Outcome::RemoveFile),
            "remove-line" => Ok(Outcome::RemoveLine),
            "keep" => Ok(Outcome::Keep),
            "replace" => {
                if argument.is_empty() {
                    return Err(EvaluationError::Malformed {
                        name: name.to_string(),
                        reason: "missing replacement text".to_string(),
                    });
                }
                let indent_len = line.len() - line.trim_start().len();
                Ok(Outcome::replace(format!("{}{}", &line[..indent_len], argument)))
            }
            other => Err(EvaluationError::UnknownDirective {
                name: other.to_string(),
            }),
        }
    }
}
