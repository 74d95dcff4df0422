//! Scenario: one package built for npm and jsr.

use crate::common::*;
use crate::{assert_file_exists, assert_file_missing};

#[test]
fn remove_line_drops_exactly_one_line() {
    let source = numbered_lines(20, 10, "@spell:remove-line");
    let env = TestEnv::builder()
        .with_file("src/x.ts", &source)
        .with_file("dist-npm/bin/x.js", &source)
        .build();

    let result = env.run(&["cast", "dist-npm"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let output = env.read("dist-npm/bin/x.js");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 19);
    assert!(!lines.iter().any(|l| l.starts_with("line10")));
    assert_eq!(lines[9], "line11");
}

#[test]
fn remove_file_deletes_output_and_reports_it_once() {
    let env = TestEnv::builder()
        .with_file("src/y.ts", DEV_ONLY_SOURCE)
        .with_file("dist-npm/bin/y.js", DEV_ONLY_SOURCE)
        .build();

    let result = env.run(&["cast", "dist-npm", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_file_missing!(env, "dist-npm/bin/y.js");
    let deleted = result.event_field("item_deleted", "path");
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].as_str().unwrap().ends_with("y.js"));
    assert_eq!(result.event_field("complete", "processed"), vec![serde_json::json!(1)]);
}

#[test]
fn replace_and_remove_line_across_npm_and_jsr() {
    let env = TestEnv::builder()
        .with_file("src/util/log.ts", DEBUG_LINE_SOURCE)
        .with_file("src/mode.ts", REPLACE_SOURCE)
        .with_file("dist-npm/bin/util/log.js", DEBUG_LINE_OUTPUT)
        .with_file("dist-npm/bin/mode.js", REPLACE_SOURCE)
        .with_file("dist-jsr/src/util/log.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-jsr/src/mode.ts", REPLACE_SOURCE)
        .build();

    let result = env.run(&["cast", "dist-npm", "dist-jsr"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(env.read("dist-npm/bin/util/log.js"), DEBUG_LINE_CAST);
    assert_eq!(env.read("dist-jsr/src/util/log.ts"), DEBUG_LINE_CAST);
    assert_eq!(env.read("dist-npm/bin/mode.js"), REPLACE_CAST);
    assert_eq!(env.read("dist-jsr/src/mode.ts"), REPLACE_CAST);
    // Sources are never touched.
    assert_eq!(env.read("src/util/log.ts"), DEBUG_LINE_SOURCE);
}

#[test]
fn unbuilt_target_is_skipped_not_an_error() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/x.js", DEBUG_LINE_OUTPUT)
        .build();

    let result = env.run(&["cast", "dist-npm", "dist-jsr", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(
        result.event_field("target_skipped", "target"),
        vec![serde_json::json!("dist-jsr")]
    );
    assert_eq!(env.read("dist-npm/bin/x.js"), DEBUG_LINE_CAST);
}

#[test]
fn dry_run_leaves_outputs_alone() {
    let env = TestEnv::builder()
        .with_file("src/y.ts", DEV_ONLY_SOURCE)
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/y.js", DEV_ONLY_SOURCE)
        .with_file("dist-npm/bin/x.js", DEBUG_LINE_OUTPUT)
        .build();

    let result = env.run(&["cast", "dist-npm", "--dry-run"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_file_exists!(env, "dist-npm/bin/y.js");
    assert_eq!(env.read("dist-npm/bin/x.js"), DEBUG_LINE_OUTPUT);
}

#[test]
fn custom_target_directory() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("build/web/x.js", DEBUG_LINE_OUTPUT)
        .build();

    let result = env.run(&["cast", "build/web"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read("build/web/x.js"), DEBUG_LINE_CAST);
}

#[test]
fn excluded_sources_are_not_cast() {
    let env = TestEnv::builder()
        .with_config("[source]\nexclude = [\"src/fixtures/\"]\n")
        .with_file("src/fixtures/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/fixtures/x.js", DEBUG_LINE_OUTPUT)
        .build();

    let result = env.run(&["cast", "dist-npm"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read("dist-npm/bin/fixtures/x.js"), DEBUG_LINE_OUTPUT);
}
