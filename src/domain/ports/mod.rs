//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod evaluator;
pub mod file_system;
pub mod spell_events;

pub use evaluator::{DirectiveEvaluator, EvalContext, EvaluationError};
pub use file_system::{DirEntry, EntryKind, FileSystem, FileWalk, FsError, FsResult};
pub use spell_events::{NoopEventSink, SpellEvent, SpellEventSink};
