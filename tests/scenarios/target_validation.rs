//! Scenario: target lists are validated before any output is touched.

use spellcaster::domain::services::{CustomPaths, TargetValidator};
use spellcaster::{LocalFs, SpellError, TargetSpec};

use crate::common::*;

fn validate(env: &TestEnv, ids: &[&str]) -> Result<(), SpellError> {
    let specs = TargetSpec::parse_all(ids)?;
    let paths = CustomPaths::new();
    TargetValidator::new(&LocalFs, env.project_root.path(), &paths).validate(&specs)
}

#[test]
fn conflict_matrix() {
    let env = TestEnv::builder().build();

    for pair in [
        ["dist-libs", "dist-libs/sdk"],
        ["dist-npm", "dist-npm"],
        ["dist-libs/sdk", "dist-libs/sdk"],
    ] {
        let err = validate(&env, &pair).unwrap_err();
        assert!(
            matches!(err, SpellError::Conflict { .. }),
            "{:?} should conflict, got {:?}",
            pair,
            err
        );
    }

    validate(&env, &["dist-npm", "dist-jsr", "dist-libs/sdk", "dist-libs/cli"]).unwrap();
}

#[test]
fn conflicting_targets_fail_the_cast_without_writing() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/x.js", DEBUG_LINE_OUTPUT)
        .build();

    let result = env.run(&["cast", "dist-npm", "dist-npm"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("conflicting targets"), "{}", result.stderr);
    assert_eq!(env.read("dist-npm/bin/x.js"), DEBUG_LINE_OUTPUT);
}

#[test]
fn missing_custom_directory_is_fatal() {
    let env = TestEnv::builder().with_file("src/x.ts", DEBUG_LINE_SOURCE).build();

    let result = env.run(&["cast", "build/missing"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("missing directory"), "{}", result.stderr);
}
