//! Domain Layer
//!
//! ## Structure
//!
//! - `entities/` - Source files, directives, per-file failures
//! - `value_objects/` - Targets, outcomes, layout, exclusions, hashes
//! - `services/` - Scanner, validator, mapper, transformer
//! - `ports/` - File system, directive evaluator, event sink
//!
//! Nothing here touches the file system directly; infrastructure supplies
//! the port implementations.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
