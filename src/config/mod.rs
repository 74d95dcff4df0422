//! Configuration module for Spellcaster
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (SPELLCASTER_*)
//! 3. Project config (`spellcaster.toml` at the project root)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::with_env_overrides;
pub use types::{Config, DirectivesConfig, LayoutConfig, RunConfig, SourceConfig, TargetsConfig};

/// Project configuration file name
pub const CONFIG_FILE: &str = "spellcaster.toml";
