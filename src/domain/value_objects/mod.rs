//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod exclude;
mod hash;
mod layout;
mod outcome;
mod target;

pub use config_warning::ConfigWarning;
pub use exclude::{ExcludeError, ExcludePatterns, SPELLIGNORE_FILE};
pub use hash::ContentHash;
pub use layout::{Layout, JSR_REGISTRY};
pub use outcome::Outcome;
pub use target::{OutputKind, ResolvedTarget, TargetSpec};
