//! Directive evaluator implementations

mod marker;

pub use marker::MarkerEvaluator;
