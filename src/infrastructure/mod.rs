//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `evaluator/` - Built-in marker directives
//! - `events/` - Console and NDJSON event sinks
//! - `logging` - `tracing` subscriber setup

pub mod evaluator;
pub mod events;
pub mod fs;
pub mod logging;

pub use evaluator::MarkerEvaluator;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
