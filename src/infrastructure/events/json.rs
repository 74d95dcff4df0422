//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SpellEvent, SpellEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as a JSON object
pub fn event_to_json(event: &SpellEvent) -> serde_json::Value {
    match event {
        SpellEvent::Started {
            source_root,
            targets,
        } => serde_json::json!({
            "event": "start",
            "command": "cast",
            "source_root": source_root.display().to_string(),
            "targets": targets,
        }),

        SpellEvent::Scanned { source_count } => serde_json::json!({
            "event": "scanned",
            "command": "cast",
            "source_count": source_count,
        }),

        SpellEvent::TargetSkipped { target, reason } => serde_json::json!({
            "event": "target_skipped",
            "command": "cast",
            "target": target,
            "reason": reason,
        }),

        SpellEvent::TargetStarted { target, file_count } => serde_json::json!({
            "event": "target_start",
            "command": "cast",
            "target": target,
            "file_count": file_count,
        }),

        SpellEvent::FileRewritten { path, spell_count } => serde_json::json!({
            "event": "item_rewritten",
            "command": "cast",
            "path": path.display().to_string(),
            "spell_count": spell_count,
        }),

        SpellEvent::FileUnchanged { path } => serde_json::json!({
            "event": "item_unchanged",
            "command": "cast",
            "path": path.display().to_string(),
        }),

        SpellEvent::FileDeleted { path } => serde_json::json!({
            "event": "item_deleted",
            "command": "cast",
            "path": path.display().to_string(),
        }),

        SpellEvent::FileError { path, error } => serde_json::json!({
            "event": "item_error",
            "command": "cast",
            "path": path.display().to_string(),
            "error": error,
        }),

        SpellEvent::Completed {
            processed_count,
            spell_count,
            error_count,
        } => {
            let status = if *error_count == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "cast",
                "status": status,
                "processed": processed_count,
                "spells": spell_count,
                "errors": error_count,
            })
        }
    }
}

impl SpellEventSink for JsonEventSink {
    fn on_event(&self, event: SpellEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
