//! Spellcaster - directive-driven rewriting of build outputs
//!
//! Authored sources carry directive comments (`// @spell:remove-line`,
//! `// @spell:remove-file`, ...). After a build has produced its
//! distribution trees, a run finds every source with directives, maps it to
//! the generated files in each requested target, and rewrites or deletes
//! those files accordingly.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::{RunOptions, RunResult, SpellUseCase};
pub use config::Config;
pub use domain::ports::{DirectiveEvaluator, FileSystem};
pub use domain::value_objects::{Outcome, TargetSpec};
pub use error::{SpellError, SpellResult};
pub use infrastructure::{LocalFs, MarkerEvaluator};
