#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use spellcaster::domain::services::{apply_directives, Applied, DEFAULT_NAMESPACE};
use spellcaster::MarkerEvaluator;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(evaluator) = MarkerEvaluator::new(DEFAULT_NAMESPACE) else {
        return;
    };
    if let Applied::Content(result) = apply_directives(content, Path::new("fuzz.js"), &evaluator) {
        // Without a namespace marker nothing may change
        if !content.contains(DEFAULT_NAMESPACE) {
            assert_eq!(result, content);
        }
    }
});
