//! Directive Evaluator port
//!
//! The meaning of each named directive lives outside the engine. The engine
//! hands every line to an evaluator and applies the returned [`Outcome`].

use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::Outcome;

/// Per-line evaluation context
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// Output file being transformed
    pub file_path: &'a Path,
    /// 0-based position of the line in the file as read
    pub line_index: usize,
}

/// Failure to interpret one line. Never fatal: the line is kept unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("unknown directive '{name}'")]
    UnknownDirective { name: String },

    #[error("directive '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Turns one line of text into an [`Outcome`].
///
/// Must be side-effect free and cheap: it is called once per line of every
/// transformed file, possibly from several worker threads at once.
pub trait DirectiveEvaluator: Send + Sync {
    fn evaluate(&self, line: &str, context: &EvalContext<'_>) -> Result<Outcome, EvaluationError>;
}

impl<F> DirectiveEvaluator for F
where
    F: Fn(&str, &EvalContext<'_>) -> Result<Outcome, EvaluationError> + Send + Sync,
{
    fn evaluate(&self, line: &str, context: &EvalContext<'_>) -> Result<Outcome, EvaluationError> {
        self(line, context)
    }
}
