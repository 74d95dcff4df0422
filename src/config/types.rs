//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::run::{
    RunOptions, DEFAULT_BATCH_SIZE, DEFAULT_CONCURRENCY, DEFAULT_TARGET_CONCURRENCY,
};
use crate::domain::services::DEFAULT_NAMESPACE;
use crate::domain::value_objects::{ConfigWarning, Layout};
use crate::error::SpellResult;

use super::loader;

/// Source tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_root")]
    pub root: PathBuf,

    #[serde(default = "default_libs_dir")]
    pub libs_dir: PathBuf,

    /// Gitignore-style patterns, relative to the project root
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_source_root(),
            libs_dir: default_libs_dir(),
            exclude: Vec::new(),
        }
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_libs_dir() -> PathBuf {
    PathBuf::from("libs")
}

/// Directive recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectivesConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for DirectivesConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Output directory names inside distribution targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_npm_bin_dir")]
    pub npm_bin_dir: PathBuf,

    #[serde(default = "default_jsr_bin_dir")]
    pub jsr_bin_dir: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            npm_bin_dir: default_npm_bin_dir(),
            jsr_bin_dir: default_jsr_bin_dir(),
        }
    }
}

fn default_npm_bin_dir() -> PathBuf {
    PathBuf::from("bin")
}

fn default_jsr_bin_dir() -> PathBuf {
    PathBuf::from("src")
}

/// Target selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TargetsConfig {
    /// Targets used when none are given on the command line
    #[serde(default)]
    pub default: Vec<String>,

    /// Root directory overrides keyed by target identifier
    #[serde(default)]
    pub paths: BTreeMap<String, PathBuf>,
}

/// Scheduling and failure policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_target_concurrency")]
    pub target_concurrency: usize,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    #[serde(default)]
    pub stop_on_error: bool,

    #[serde(default = "default_true")]
    pub copy_from_source: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            target_concurrency: default_target_concurrency(),
            batch_size: default_batch_size(),
            stop_on_error: false,
            copy_from_source: true,
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_target_concurrency() -> usize {
    DEFAULT_TARGET_CONCURRENCY
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_true() -> bool {
    true
}

/// Main configuration structure (`spellcaster.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub directives: DirectivesConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SpellResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> SpellResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `spellcaster.toml` from the project root, or defaults, then
    /// apply environment overrides
    pub fn load_or_default(project_root: &Path) -> SpellResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SPELLCASTER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn layout(&self) -> Layout {
        Layout {
            source_root: self.source.root.clone(),
            libs_dir: self.source.libs_dir.clone(),
            npm_bin_dir: self.layout.npm_bin_dir.clone(),
            jsr_bin_dir: self.layout.jsr_bin_dir.clone(),
        }
    }

    /// Run options for `project_root` before CLI flags are applied
    pub fn run_options(&self, project_root: impl Into<PathBuf>) -> RunOptions {
        RunOptions::new(project_root)
            .with_layout(self.layout())
            .with_concurrency(self.run.concurrency)
            .with_target_concurrency(self.run.target_concurrency)
            .with_batch_size(self.run.batch_size)
            .with_stop_on_error(self.run.stop_on_error)
            .with_copy_from_source(self.run.copy_from_source)
            .with_custom_output_paths(self.targets.paths.clone())
            .with_exclude(self.source.exclude.clone())
            .with_namespace(self.directives.namespace.clone())
    }
}
