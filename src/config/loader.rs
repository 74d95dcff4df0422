//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{SpellError, SpellResult};

use super::types::Config;
use super::CONFIG_FILE;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SpellResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SpellError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project config file or defaults, with env overrides applied
pub fn load_or_default(project_root: &Path) -> SpellResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (SPELLCASTER_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // SPELLCASTER_TARGETS (comma-separated)
    if let Some(targets) = get_env("SPELLCASTER_TARGETS") {
        let parsed: Vec<String> = targets
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.targets.default = parsed;
        }
    }

    if let Some(n) = get_env("SPELLCASTER_CONCURRENCY").and_then(|v| parse_count(&v)) {
        config.run.concurrency = n;
    }

    if let Some(n) = get_env("SPELLCASTER_BATCH_SIZE").and_then(|v| parse_count(&v)) {
        config.run.batch_size = n;
    }

    if let Some(val) = get_env("SPELLCASTER_STOP_ON_ERROR") {
        config.run.stop_on_error = parse_flag(&val);
    }

    if let Some(val) = get_env("SPELLCASTER_COPY_FROM_SOURCE") {
        config.run.copy_from_source = parse_flag(&val);
    }

    config
}

fn parse_count(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0" && value != "no"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "root",
        "libs_dir",
        "exclude",
        "directives",
        "namespace",
        "layout",
        "npm_bin_dir",
        "jsr_bin_dir",
        "targets",
        "default",
        "paths",
        "run",
        "concurrency",
        "target_concurrency",
        "batch_size",
        "stop_on_error",
        "copy_from_source",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
