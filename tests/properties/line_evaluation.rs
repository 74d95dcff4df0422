//! Property tests for per-line directive evaluation.

use std::path::Path;

use proptest::prelude::*;

use spellcaster::domain::ports::{EvalContext, EvaluationError};
use spellcaster::domain::services::{apply_directives, split_lines, Applied};
use spellcaster::Outcome;

/// Outcome decided by the line text alone, never by its position
fn by_text(line: &str, _: &EvalContext<'_>) -> Result<Outcome, EvaluationError> {
    if line.contains("@spell:remove-line") {
        Ok(Outcome::RemoveLine)
    } else if let Some(rest) = line.split("@spell:replace ").nth(1) {
        Ok(Outcome::replace(rest.to_string()))
    } else if line.contains("@spell:broken") {
        Err(EvaluationError::Other("broken".into()))
    } else {
        Ok(Outcome::Keep)
    }
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ;(){}]{0,24}",
        "[a-z ]{0,8}".prop_map(|s| format!("{} // @spell:remove-line", s)),
        "[a-z]{1,8}".prop_map(|s| format!("x(); // @spell:replace {}", s)),
        Just("y(); // @spell:broken".to_string()),
    ]
}

fn terminator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n")]
}

/// Reference evaluation, first line to last
fn forward(content: &str) -> String {
    let mut out = String::new();
    for (line_index, line) in split_lines(content).iter().enumerate() {
        let ctx = EvalContext {
            file_path: Path::new("x.js"),
            line_index,
        };
        match by_text(line.text, &ctx).unwrap_or(Outcome::Keep) {
            Outcome::RemoveLine => {}
            Outcome::Replace(text) => {
                out.push_str(&text);
                out.push_str(line.terminator);
            }
            _ => out.push_str(&line.raw()),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Backward evaluation keeps exactly what forward evaluation keeps.
    #[test]
    fn property_backward_matches_forward(
        lines in proptest::collection::vec((line(), terminator()), 0..=24),
        trailing_newline in any::<bool>(),
    ) {
        let mut content: String = lines.iter().map(|(l, t)| format!("{}{}", l, t)).collect();
        if !trailing_newline && content.ends_with('\n') {
            content.pop();
            if content.ends_with('\r') {
                content.pop();
            }
        }

        match apply_directives(&content, Path::new("x.js"), &by_text) {
            Applied::Content(result) => {
                prop_assert_eq!(result, forward(&content));
            }
            Applied::DeleteFile { .. } => {
                prop_assert!(false, "no remove-file directive was generated");
            }
        }
    }

    /// PROPERTY: Lines without directives survive byte for byte.
    #[test]
    fn property_plain_content_is_untouched(content in "(?s)[^@]{0,256}") {
        prop_assert_eq!(
            apply_directives(&content, Path::new("x.js"), &by_text),
            Applied::Content(content.clone())
        );
    }

    /// PROPERTY: One remove-file line anywhere deletes the file.
    #[test]
    fn property_remove_file_anywhere_deletes(
        lines in proptest::collection::vec(line(), 0..=12),
        at in any::<prop::sample::Index>(),
    ) {
        let mut lines = lines;
        let position = at.index(lines.len() + 1);
        lines.insert(position, "// @spell:remove-file".to_string());
        let content = lines.join("\n");

        let evaluator = |line: &str, ctx: &EvalContext<'_>| {
            if line.contains("@spell:remove-file") {
                Ok(Outcome::RemoveFile)
            } else {
                by_text(line, ctx)
            }
        };
        let applied = apply_directives(&content, Path::new("x.js"), &evaluator);
        let deleted = matches!(applied, Applied::DeleteFile { .. });
        prop_assert!(deleted);
    }
}
