//! Event Sink Implementations
//!
//! Concrete implementations of SpellEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: human-readable progress on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
