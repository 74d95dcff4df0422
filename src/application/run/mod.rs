//! Run Module
//!
//! Orchestrates a spell run.
//!
//! ## Structure
//!
//! - `options` - Configuration (`RunOptions`)
//! - `result` - Result summary (`RunResult`)
//! - `use_case` - Core use case logic (`SpellUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use spellcaster::application::run::{RunOptions, SpellUseCase};
//!
//! let use_case = SpellUseCase::new(LocalFs, MarkerEvaluator::new("@spell:")?);
//! let result = use_case.execute(&targets, &RunOptions::new(project_root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{RunOptions, DEFAULT_BATCH_SIZE, DEFAULT_CONCURRENCY, DEFAULT_TARGET_CONCURRENCY};
pub use result::RunResult;
pub use use_case::{resolve_targets, scan_sources, SpellUseCase};
