//! Spell Event Port
//!
//! Observable interface for a run: progress reporting, NDJSON event
//! streams for CI, and debugging.

use std::path::PathBuf;

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum SpellEvent {
    /// Run started (targets already validated)
    Started {
        source_root: PathBuf,
        targets: Vec<String>,
    },

    /// Source tree scanned
    Scanned { source_count: usize },

    /// Target root missing or nothing to do
    TargetSkipped { target: String, reason: String },

    /// Target mapped to its output files
    TargetStarted { target: String, file_count: usize },

    /// Output file content changed
    FileRewritten { path: PathBuf, spell_count: usize },

    /// Output file already up to date
    FileUnchanged { path: PathBuf },

    /// Output file removed by a remove-file directive
    FileDeleted { path: PathBuf },

    /// Output file could not be processed
    FileError { path: PathBuf, error: String },

    /// Run finished
    Completed {
        processed_count: usize,
        spell_count: usize,
        error_count: usize,
    },
}

/// Trait for receiving run events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable lines
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait SpellEventSink: Send + Sync {
    fn on_event(&self, event: SpellEvent);

    /// Whether the sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SpellEventSink for NoopEventSink {
    fn on_event(&self, _event: SpellEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
