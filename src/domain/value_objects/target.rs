//! Target value objects - which distribution trees receive transformed files

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SpellError, SpellResult};

/// Built-in distribution layout kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Plain npm output (`dist-npm`)
    PlainNpm,
    /// Plain jsr output (`dist-jsr`)
    PlainJsr,
    /// One directory per library, each with registry sub-trees (`dist-libs`)
    MultiLibrary,
    /// Any other directory named by the caller
    Custom,
}

impl OutputKind {
    /// Built-in kinds (excluding `Custom`)
    pub const BUILT_IN: [OutputKind; 3] = [
        OutputKind::PlainNpm,
        OutputKind::PlainJsr,
        OutputKind::MultiLibrary,
    ];

    /// Parse a built-in identifier; `None` means the identifier is custom
    pub fn from_identifier(s: &str) -> Option<Self> {
        match s {
            "dist-npm" => Some(OutputKind::PlainNpm),
            "dist-jsr" => Some(OutputKind::PlainJsr),
            "dist-libs" => Some(OutputKind::MultiLibrary),
            _ => None,
        }
    }

    /// Identifier used on the command line and default root directory name
    pub fn identifier(&self) -> &'static str {
        match self {
            OutputKind::PlainNpm => "dist-npm",
            OutputKind::PlainJsr => "dist-jsr",
            OutputKind::MultiLibrary => "dist-libs",
            OutputKind::Custom => "custom",
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, OutputKind::PlainNpm | OutputKind::PlainJsr)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A requested target: `"<kind>"`, `"<kind>/<name>"` or an arbitrary path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetSpec {
    /// One of the built-in kinds, optionally narrowed to a single library
    BuiltIn {
        kind: OutputKind,
        sub_name: Option<String>,
    },
    /// A caller-defined output directory
    Custom { name: String },
}

impl TargetSpec {
    /// Parse a target identifier
    pub fn parse(input: &str) -> SpellResult<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(SpellError::invalid_target(input, "target name is empty"));
        }

        let (head, sub) = match raw.split_once('/') {
            Some((head, sub)) => (head, Some(sub)),
            None => (raw, None),
        };

        let Some(kind) = OutputKind::from_identifier(head) else {
            return Ok(TargetSpec::Custom {
                name: raw.to_string(),
            });
        };

        match (kind, sub) {
            (_, None) => Ok(TargetSpec::BuiltIn {
                kind,
                sub_name: None,
            }),
            (OutputKind::MultiLibrary, Some(name)) => {
                if name.is_empty() {
                    return Err(SpellError::invalid_target(raw, "library name is empty"));
                }
                if name.contains('/') || name == "." || name == ".." {
                    return Err(SpellError::invalid_target(
                        raw,
                        "library name must be a single directory name",
                    ));
                }
                Ok(TargetSpec::BuiltIn {
                    kind,
                    sub_name: Some(name.to_string()),
                })
            }
            (_, Some(_)) => Err(SpellError::invalid_target(
                raw,
                format!("'{}' does not accept a sub-target", kind),
            )),
        }
    }

    /// Parse a list of identifiers, failing on the first malformed one
    pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> SpellResult<Vec<Self>> {
        inputs.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn kind(&self) -> OutputKind {
        match self {
            TargetSpec::BuiltIn { kind, .. } => *kind,
            TargetSpec::Custom { .. } => OutputKind::Custom,
        }
    }

    pub fn sub_name(&self) -> Option<&str> {
        match self {
            TargetSpec::BuiltIn { sub_name, .. } => sub_name.as_deref(),
            TargetSpec::Custom { .. } => None,
        }
    }

    /// Key used to look up a root override in `custom_output_paths`
    pub fn root_key(&self) -> &str {
        match self {
            TargetSpec::BuiltIn { kind, .. } => kind.identifier(),
            TargetSpec::Custom { name } => name,
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::BuiltIn {
                kind,
                sub_name: Some(name),
            } => write!(f, "{}/{}", kind, name),
            TargetSpec::BuiltIn { kind, .. } => write!(f, "{}", kind),
            TargetSpec::Custom { name } => write!(f, "{}", name),
        }
    }
}

impl std::str::FromStr for TargetSpec {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A concrete directory scope that receives transformed files.
///
/// For multi-library targets `root` is the library directory
/// (`<dist-libs>/<sub_name>`), not the `dist-libs` root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedTarget {
    pub kind: OutputKind,
    pub sub_name: Option<String>,
    pub root: PathBuf,
}

impl ResolvedTarget {
    pub fn new(kind: OutputKind, sub_name: Option<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            sub_name,
            root: root.into(),
        }
    }

    /// Short label for logs and events (`dist-libs/sdk`, `dist-npm`, `build/out`)
    pub fn label(&self) -> String {
        match (&self.kind, &self.sub_name) {
            (OutputKind::Custom, _) => self.root.display().to_string(),
            (kind, Some(name)) => format!("{}/{}", kind, name),
            (kind, None) => kind.to_string(),
        }
    }
}

impl fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
