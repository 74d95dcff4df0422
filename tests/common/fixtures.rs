//! Test fixtures - reusable content for tests.

/// Source whose debug line disappears from builds
pub const DEBUG_LINE_SOURCE: &str = "export function run() {\n  console.log(\"debug\"); // @spell:remove-line\n  return 1;\n}\n";

/// What the bundler produced for [`DEBUG_LINE_SOURCE`]
pub const DEBUG_LINE_OUTPUT: &str = "export function run() {\n  console.log(\"debug\"); // @spell:remove-line\n  return 1;\n}\n";

/// [`DEBUG_LINE_OUTPUT`] after casting
pub const DEBUG_LINE_CAST: &str = "export function run() {\n  return 1;\n}\n";

/// Source that must never ship
pub const DEV_ONLY_SOURCE: &str = "// @spell:remove-file\nexport const devOnly = true;\n";

/// Source with a replacement directive
pub const REPLACE_SOURCE: &str = "const mode = \"dev\"; // @spell:replace const mode = \"prod\";\nexport { mode };\n";

/// [`REPLACE_SOURCE`] after casting
pub const REPLACE_CAST: &str = "const mode = \"prod\";\nexport { mode };\n";

/// A file with `total` numbered lines; line `at` (1-based) carries `directive`
pub fn numbered_lines(total: usize, at: usize, directive: &str) -> String {
    (1..=total)
        .map(|n| {
            if n == at {
                format!("line{} // {}\n", n, directive)
            } else {
                format!("line{}\n", n)
            }
        })
        .collect()
}
