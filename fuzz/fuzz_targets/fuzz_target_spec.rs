#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(spec) = spellcaster::TargetSpec::parse(input) {
            // Display output parses back to the same target
            let again = spellcaster::TargetSpec::parse(&spec.to_string());
            assert_eq!(again.ok(), Some(spec));
        }
    }
});
