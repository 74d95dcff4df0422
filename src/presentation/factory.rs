//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::SpellUseCase;
use crate::error::SpellResult;
use crate::infrastructure::{LocalFs, MarkerEvaluator};

/// The spell use case over the local disk and the marker grammar
pub type ConcreteSpellUseCase = SpellUseCase<LocalFs, MarkerEvaluator>;

/// Create a spell use case recognizing directives in `namespace`
pub fn create_spell_use_case(namespace: &str) -> SpellResult<ConcreteSpellUseCase> {
    let evaluator = MarkerEvaluator::new(namespace)?;
    Ok(SpellUseCase::new(LocalFs::default(), evaluator))
}
