//! Domain Services
//!
//! Business logic that operates on domain entities. All file access goes
//! through the [`FileSystem`](crate::domain::ports::FileSystem) port.

mod binary;
pub mod directive;
mod mapper;
mod scanner;
pub mod transformer;
mod validator;

pub use binary::is_binary_path;
pub use directive::{DirectivePattern, DEFAULT_NAMESPACE};
pub use mapper::{CorrespondenceMapper, RegistryCache};
pub use scanner::{DirectiveScanner, ScanReport};
pub use transformer::{
    apply_directives, split_lines, Applied, FileChange, FileReport, FileTransformer, Line,
    TransformOptions,
};
pub use validator::{CustomPaths, TargetValidator};
