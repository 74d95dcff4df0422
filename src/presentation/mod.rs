//! Presentation Layer
//!
//! - `factory` - Wires the spell use case to its infrastructure
//! - `output` - Renders scan and target listings as text or JSON
//!
//! Run progress itself is rendered by the event sinks in
//! `infrastructure::events`.

pub mod factory;
pub mod output;

pub use factory::{create_spell_use_case, ConcreteSpellUseCase};
pub use output::OutputFormat;
