use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spellcaster - directive-driven rewriting of build outputs
#[derive(Parser, Debug)]
#[command(name = "spellcaster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to the nearest directory with spellcaster.toml,
    /// package.json or .git)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply directives to the build outputs of the given targets
    Cast {
        /// Targets (dist-npm, dist-jsr, dist-libs, dist-libs/<name>, or a custom directory)
        targets: Vec<String>,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Abort on the first file error
        #[arg(long)]
        stop_on_error: bool,

        /// Do not refresh outputs from their sources first
        #[arg(long)]
        no_copy: bool,

        /// Files processed in parallel per target
        #[arg(long)]
        concurrency: Option<usize>,

        /// Files scheduled per chunk
        #[arg(long)]
        batch_size: Option<usize>,

        /// Override a target's root directory (NAME=DIR, repeatable)
        #[arg(long = "path", value_name = "NAME=DIR", value_parser = parse_path_override)]
        paths: Vec<(String, PathBuf)>,
    },

    /// List source files that carry directives
    Scan,

    /// Validate targets and print what they resolve to
    Targets {
        /// Targets to resolve (defaults to the configured ones)
        targets: Vec<String>,
    },
}

fn parse_path_override(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((name, dir)) if !name.trim().is_empty() && !dir.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(dir.trim())))
        }
        _ => Err(format!("expected NAME=DIR, got '{}'", value)),
    }
}
