//! Scenario: casting again after a cast, and after editing a source.

use crate::common::*;

fn unchanged_and_rewritten(result: &TestResult) -> (usize, usize) {
    (
        result.event_field("item_unchanged", "path").len(),
        result.event_field("item_rewritten", "path").len(),
    )
}

#[test]
fn second_cast_rewrites_nothing() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("src/mode.ts", REPLACE_SOURCE)
        .with_file("dist-npm/bin/x.js", DEBUG_LINE_OUTPUT)
        .with_file("dist-npm/bin/mode.js", REPLACE_SOURCE)
        .build();

    let first = env.run(&["cast", "dist-npm", "--json"]);
    assert!(first.is_success(), "{}", first.combined_output());
    assert_eq!(unchanged_and_rewritten(&first), (0, 2));
    let after_first = (env.read("dist-npm/bin/x.js"), env.read("dist-npm/bin/mode.js"));

    let second = env.run(&["cast", "dist-npm", "--json"]);
    assert!(second.is_success(), "{}", second.combined_output());
    assert_eq!(unchanged_and_rewritten(&second), (2, 0));
    assert_eq!(
        (env.read("dist-npm/bin/x.js"), env.read("dist-npm/bin/mode.js")),
        after_first
    );
}

#[test]
fn edited_source_is_picked_up_on_next_cast() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/x.js", DEBUG_LINE_OUTPUT)
        .build();

    assert!(env.run(&["cast", "dist-npm"]).is_success());
    assert_eq!(env.read("dist-npm/bin/x.js"), DEBUG_LINE_CAST);

    env.write(
        "src/x.ts",
        "export function run() {\n  trace(); // @spell:remove-line\n  return 2;\n}\n",
    );
    assert!(env.run(&["cast", "dist-npm"]).is_success());
    assert_eq!(
        env.read("dist-npm/bin/x.js"),
        "export function run() {\n  return 2;\n}\n"
    );
}

#[test]
fn no_copy_evaluates_the_output_as_built() {
    let env = TestEnv::builder()
        .with_file("src/x.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-npm/bin/x.js", "bundled(); // @spell:remove-line\nkeep();\n")
        .build();

    let result = env.run(&["cast", "dist-npm", "--no-copy"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read("dist-npm/bin/x.js"), "keep();\n");
}
