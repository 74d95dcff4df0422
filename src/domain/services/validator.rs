//! Target validation and resolution
//!
//! Validation is a pure pass over the requested list plus an existence check
//! for custom directories. Built-in targets may legitimately be missing (not
//! built yet); they are skipped later rather than rejected here.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{OutputKind, ResolvedTarget, TargetSpec};
use crate::error::{SpellError, SpellResult};

/// Root overrides keyed by target identifier (`dist-npm`, `build/out`, ...)
pub type CustomPaths = BTreeMap<String, PathBuf>;

/// Validates requested targets and resolves them to directory scopes
pub struct TargetValidator<'a> {
    fs: &'a dyn FileSystem,
    project_root: &'a Path,
    custom_paths: &'a CustomPaths,
}

impl<'a> TargetValidator<'a> {
    pub fn new(fs: &'a dyn FileSystem, project_root: &'a Path, custom_paths: &'a CustomPaths) -> Self {
        Self {
            fs,
            project_root,
            custom_paths,
        }
    }

    /// Absolute root directory for a spec, honouring overrides
    pub fn root_for(&self, spec: &TargetSpec) -> PathBuf {
        match self.custom_paths.get(spec.root_key()) {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.project_root.join(path),
            None => self.project_root.join(spec.root_key()),
        }
    }

    /// Reject duplicate or conflicting targets and missing custom directories
    pub fn validate(&self, specs: &[TargetSpec]) -> SpellResult<()> {
        let mut seen_plain: HashSet<OutputKind> = HashSet::new();
        let mut seen_custom: HashSet<&str> = HashSet::new();
        let mut seen_libraries: HashSet<&str> = HashSet::new();
        let mut bare_libraries = false;

        for spec in specs {
            match spec {
                TargetSpec::Custom { name } => {
                    if !seen_custom.insert(name.as_str()) {
                        return Err(SpellError::conflict(format!(
                            "custom target '{}' is listed more than once",
                            name
                        )));
                    }
                    let root = self.root_for(spec);
                    if !self.fs.is_dir(&root) {
                        return Err(SpellError::NotFound {
                            target: name.clone(),
                            path: root,
                        });
                    }
                }
                TargetSpec::BuiltIn {
                    kind: OutputKind::MultiLibrary,
                    sub_name: None,
                } => {
                    if bare_libraries {
                        return Err(SpellError::conflict(format!(
                            "'{}' is listed more than once",
                            OutputKind::MultiLibrary
                        )));
                    }
                    if !seen_libraries.is_empty() {
                        return Err(mixed_library_conflict());
                    }
                    bare_libraries = true;
                }
                TargetSpec::BuiltIn {
                    kind: OutputKind::MultiLibrary,
                    sub_name: Some(name),
                } => {
                    if bare_libraries {
                        return Err(mixed_library_conflict());
                    }
                    if !seen_libraries.insert(name.as_str()) {
                        return Err(SpellError::conflict(format!(
                            "'{}' is listed more than once",
                            spec
                        )));
                    }
                }
                TargetSpec::BuiltIn {
                    kind,
                    sub_name: Some(_),
                } => {
                    return Err(SpellError::invalid_target(
                        spec.to_string(),
                        format!("'{}' does not accept a sub-target", kind),
                    ));
                }
                TargetSpec::BuiltIn {
                    kind,
                    sub_name: None,
                } => {
                    if !seen_plain.insert(*kind) {
                        return Err(SpellError::conflict(format!(
                            "'{}' is listed more than once",
                            kind
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Turn validated specs into concrete scopes.
    ///
    /// A bare multi-library target fans out to one scope per library
    /// directory on disk. If the `dist-libs` root itself is missing it
    /// resolves to a single scope at that root, which the orchestrator
    /// then skips as "not built yet".
    pub fn resolve(&self, specs: &[TargetSpec]) -> SpellResult<Vec<ResolvedTarget>> {
        let mut resolved = Vec::new();

        for spec in specs {
            let root = self.root_for(spec);
            match spec {
                TargetSpec::Custom { .. } => {
                    resolved.push(ResolvedTarget::new(OutputKind::Custom, None, root));
                }
                TargetSpec::BuiltIn {
                    kind: OutputKind::MultiLibrary,
                    sub_name: Some(name),
                } => {
                    resolved.push(ResolvedTarget::new(
                        OutputKind::MultiLibrary,
                        Some(name.clone()),
                        root.join(name),
                    ));
                }
                TargetSpec::BuiltIn {
                    kind: OutputKind::MultiLibrary,
                    sub_name: None,
                } => {
                    if !self.fs.is_dir(&root) {
                        resolved.push(ResolvedTarget::new(OutputKind::MultiLibrary, None, root));
                        continue;
                    }
                    let entries = self.fs.list_dir(&root).map_err(|e| SpellError::Scan {
                        path: root.clone(),
                        message: e.to_string(),
                    })?;
                    for entry in entries {
                        if entry.is_dir() && !entry.name.starts_with('.') {
                            let library_root = root.join(&entry.name);
                            resolved.push(ResolvedTarget::new(
                                OutputKind::MultiLibrary,
                                Some(entry.name),
                                library_root,
                            ));
                        }
                    }
                }
                TargetSpec::BuiltIn { kind, .. } => {
                    resolved.push(ResolvedTarget::new(*kind, None, root));
                }
            }
        }

        Ok(resolved)
    }
}

fn mixed_library_conflict() -> SpellError {
    SpellError::conflict(format!(
        "cannot mix bare '{0}' target with specific '{0}/<name>' targets",
        OutputKind::MultiLibrary
    ))
}
