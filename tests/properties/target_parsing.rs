//! Property tests for target identifiers.

use proptest::prelude::*;

use spellcaster::domain::value_objects::OutputKind;
use spellcaster::TargetSpec;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_target_parse_never_panics(input in "(?s).{0,64}") {
        let _ = TargetSpec::parse(&input);
    }

    /// PROPERTY: Every library name parses to a specific multi-library target.
    #[test]
    fn property_library_targets_keep_their_name(name in "[a-z][a-z0-9_-]{0,15}") {
        let spec = TargetSpec::parse(&format!("dist-libs/{}", name)).unwrap();
        prop_assert_eq!(spec.kind(), OutputKind::MultiLibrary);
        prop_assert_eq!(spec.sub_name(), Some(name.as_str()));
    }
}
