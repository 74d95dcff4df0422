//! Scenario: a monorepo building several libraries into `dist-libs`.

use crate::common::*;
use crate::assert_file_missing;

fn monorepo() -> TestEnv {
    TestEnv::builder()
        .with_file("src/libs/sdk/client.ts", DEBUG_LINE_SOURCE)
        .with_file("src/libs/cli/client.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-libs/sdk/npm/bin/client.js", DEBUG_LINE_OUTPUT)
        .with_file("dist-libs/sdk/jsr/src/client.ts", DEBUG_LINE_SOURCE)
        .with_file("dist-libs/cli/npm/bin/client.js", DEBUG_LINE_OUTPUT)
        .build()
}

#[test]
fn bare_target_fans_out_to_every_library_and_registry() {
    let env = monorepo();

    let result = env.run(&["cast", "dist-libs", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let mut started: Vec<(String, u64)> = result
        .json_lines()
        .into_iter()
        .filter(|v| v["event"] == "target_start")
        .map(|v| {
            (
                v["target"].as_str().unwrap().to_string(),
                v["file_count"].as_u64().unwrap(),
            )
        })
        .collect();
    started.sort();
    assert_eq!(
        started,
        vec![
            ("dist-libs/cli".to_string(), 1),
            ("dist-libs/sdk".to_string(), 2),
        ]
    );

    assert_eq!(env.read("dist-libs/sdk/npm/bin/client.js"), DEBUG_LINE_CAST);
    assert_eq!(env.read("dist-libs/sdk/jsr/src/client.ts"), DEBUG_LINE_CAST);
    assert_eq!(env.read("dist-libs/cli/npm/bin/client.js"), DEBUG_LINE_CAST);
}

#[test]
fn specific_library_leaves_others_alone() {
    let env = monorepo();

    let result = env.run(&["cast", "dist-libs/sdk"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(env.read("dist-libs/sdk/npm/bin/client.js"), DEBUG_LINE_CAST);
    assert_eq!(env.read("dist-libs/cli/npm/bin/client.js"), DEBUG_LINE_OUTPUT);
}

#[test]
fn library_sources_never_map_into_other_libraries() {
    let env = TestEnv::builder()
        .with_file("src/libs/sdk/dev.ts", DEV_ONLY_SOURCE)
        .with_file("dist-libs/sdk/npm/bin/dev.js", DEV_ONLY_SOURCE)
        .with_file("dist-libs/cli/npm/bin/dev.js", "export const shipped = true;\n")
        .build();

    let result = env.run(&["cast", "dist-libs"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_file_missing!(env, "dist-libs/sdk/npm/bin/dev.js");
    assert_eq!(
        env.read("dist-libs/cli/npm/bin/dev.js"),
        "export const shipped = true;\n"
    );
}
