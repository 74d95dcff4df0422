//! Command handlers for the CLI

pub mod cast;
mod project_root;
pub mod scan;
pub mod targets;

use std::path::PathBuf;

use anyhow::{bail, Result};

use spellcaster::application::RunOptions;
use spellcaster::config::Config;
use spellcaster::domain::value_objects::TargetSpec;
use spellcaster::presentation::OutputFormat;

use project_root::discover_project_root;

/// Everything a command needs before it starts: where the project is and
/// how it is configured
pub struct Session {
    pub project_root: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl Session {
    /// Resolve the project root and load its configuration.
    ///
    /// Config warnings are printed to stderr; they never stop the command.
    pub fn load(project: Option<PathBuf>, json: bool, verbose: u8) -> Result<Self> {
        let project_root = match project {
            Some(dir) => dir,
            None => discover_project_root(&std::env::current_dir()?),
        };
        if !project_root.is_dir() {
            bail!("project root {} is not a directory", project_root.display());
        }

        let (config, warnings) = Config::load_or_default(&project_root)?;
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }
        tracing::debug!(root = %project_root.display(), "loaded configuration");

        Ok(Self {
            project_root,
            config,
            format: OutputFormat::from_json_flag(json),
            verbose,
        })
    }

    pub fn run_options(&self) -> RunOptions {
        self.config.run_options(self.project_root.clone())
    }

    /// Targets from the command line, falling back to `targets.default`
    pub fn target_specs(&self, requested: &[String]) -> Result<Vec<TargetSpec>> {
        let ids: &[String] = if requested.is_empty() {
            &self.config.targets.default
        } else {
            requested
        };
        if ids.is_empty() {
            bail!("no targets given and no [targets] default configured");
        }
        Ok(TargetSpec::parse_all(ids)?)
    }
}
