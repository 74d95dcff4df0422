//! Domain Entities
//!
//! - `SourceFile` - An authored file that carries directives
//! - `Directive` - One directive-shaped line inside a file
//! - `FileFailure` - A per-file error recorded during a run

mod failure;
mod source_file;

pub use failure::FileFailure;
pub use source_file::{is_declaration_path, Directive, SourceFile};
