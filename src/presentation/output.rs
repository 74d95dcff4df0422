//! Output Rendering
//!
//! Listings for the `scan` and `targets` commands. Run progress goes through
//! the event sinks instead.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::domain::services::ScanReport;
use crate::domain::value_objects::ResolvedTarget;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON document for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render the directive-bearing sources found by a scan
pub fn render_scan(
    w: &mut dyn Write,
    report: &ScanReport,
    format: OutputFormat,
    verbose: u8,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let sources: Vec<_> = report
                .sources
                .iter()
                .map(|source| {
                    json!({
                        "path": display(source.relative_path()),
                        "lines": source.line_count(),
                        "directives": source
                            .directives()
                            .iter()
                            .map(|d| json!({ "line": d.line_index + 1, "text": d.raw_line.trim() }))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            let failures: Vec<_> = report
                .failures
                .iter()
                .map(|f| json!({ "path": display(&f.path), "error": f.error }))
                .collect();
            let doc = json!({
                "command": "scan",
                "visited": report.visited,
                "sources": sources,
                "failures": failures,
            });
            writeln!(w, "{}", doc)
        }
        OutputFormat::Text => {
            for source in &report.sources {
                writeln!(
                    w,
                    "{} ({} directive(s))",
                    source.relative_path().display(),
                    source.directives().len()
                )?;
                if verbose > 0 {
                    for directive in source.directives() {
                        writeln!(w, "  {:>5}: {}", directive.line_index + 1, directive.raw_line.trim())?;
                    }
                }
            }
            for failure in &report.failures {
                writeln!(w, "error {}: {}", failure.path.display(), failure.error)?;
            }
            writeln!(
                w,
                "{} source file(s) with directives, {} file(s) visited",
                report.sources.len(),
                report.visited
            )
        }
    }
}

/// Render resolved targets, with whether their root currently exists
pub fn render_targets(
    w: &mut dyn Write,
    targets: &[ResolvedTarget],
    exists: impl Fn(&Path) -> bool,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let items: Vec<_> = targets
                .iter()
                .map(|t| {
                    json!({
                        "target": t.label(),
                        "kind": t.kind.identifier(),
                        "root": display(&t.root),
                        "exists": exists(&t.root),
                    })
                })
                .collect();
            writeln!(w, "{}", json!({ "command": "targets", "targets": items }))
        }
        OutputFormat::Text => {
            for t in targets {
                let state = if exists(&t.root) { "" } else { " (not built)" };
                writeln!(w, "{} -> {}{}", t.label(), t.root.display(), state)?;
            }
            Ok(())
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
