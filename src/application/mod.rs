//! Application Layer
//!
//! Use cases that orchestrate the business flow. Depends on the domain
//! layer for all rules; infrastructure is injected through ports.
//!
//! ## Use Cases
//!
//! - `SpellUseCase` - validate, scan, map and transform in one run

pub mod run;

pub use run::{resolve_targets, scan_sources, RunOptions, RunResult, SpellUseCase};
