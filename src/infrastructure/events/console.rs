//! Console Event Sink
//!
//! Human-readable progress on stderr. Colour is used only on a terminal and
//! when `NO_COLOR` is unset.

use std::io::{self, Write};
use std::sync::Mutex;

use is_terminal::IsTerminal;

use crate::domain::ports::{SpellEvent, SpellEventSink};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Sink on stderr; `verbose` adds a line for every unchanged file
    pub fn stderr(verbose: bool) -> Self {
        let color = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            color,
            verbose,
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color: false,
            verbose,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl SpellEventSink for ConsoleEventSink {
    fn on_event(&self, event: SpellEvent) {
        match event {
            SpellEvent::Started {
                source_root,
                targets,
            } => self.line(format!(
                "Casting spells from {} into {}",
                source_root.display(),
                targets.join(", ")
            )),
            SpellEvent::Scanned { source_count } => {
                self.line(format!("Found {} source file(s) with directives", source_count))
            }
            SpellEvent::TargetSkipped { target, reason } => self.line(format!(
                "{} {} ({})",
                self.paint(YELLOW, "skip"),
                target,
                reason
            )),
            SpellEvent::TargetStarted { target, file_count } => {
                self.line(format!("{} ({} file(s))", target, file_count))
            }
            SpellEvent::FileRewritten { path, .. } => self.line(format!(
                "  {} {}",
                self.paint(GREEN, "rewrote"),
                path.display()
            )),
            SpellEvent::FileDeleted { path } => self.line(format!(
                "  {} {}",
                self.paint(YELLOW, "deleted"),
                path.display()
            )),
            SpellEvent::FileUnchanged { path } => {
                if self.verbose {
                    self.line(format!("  {} {}", self.paint(DIM, "unchanged"), path.display()));
                }
            }
            SpellEvent::FileError { path, error } => self.line(format!(
                "  {} {}: {}",
                self.paint(RED, "error"),
                path.display(),
                error
            )),
            SpellEvent::Completed {
                processed_count,
                spell_count,
                error_count,
            } => {
                let summary = format!(
                    "Processed {} file(s), {} spell(s) remaining, {} error(s)",
                    processed_count, spell_count, error_count
                );
                let color = if error_count == 0 { GREEN } else { RED };
                self.line(self.paint(color, &summary));
            }
        }
    }
}
