//! Source-to-output correspondence
//!
//! Distribution trees are not laid out 1:1 with the source tree:
//!
//! ```text
//! src/x.ts                   -> dist-npm/bin/x.js, dist-npm/bin/x.ts
//! src/libs/sdk/api/client.ts -> dist-libs/sdk/npm/bin/api/client.js
//!                               dist-libs/sdk/jsr/src/api/client.ts
//! src/types.d.ts             -> dist-npm/bin/types.d.ts
//! ```
//!
//! Only candidates that exist on disk are returned. A missing candidate is
//! the normal "not emitted by this build" case, not an error.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{is_declaration_path, SourceFile};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{Layout, OutputKind, ResolvedTarget};

/// Per-run memo of registry sub-directories, keyed by library name.
///
/// Lives inside one run only, so repeated runs never see stale layouts.
#[derive(Debug, Default)]
pub struct RegistryCache {
    entries: Mutex<HashMap<String, Arc<Vec<String>>>>,
}

impl RegistryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registries present under `library_root`, discovered on first use
    pub fn registries(&self, fs: &dyn FileSystem, library: &str, library_root: &Path) -> Arc<Vec<String>> {
        if let Some(hit) = self.lock().get(library) {
            return Arc::clone(hit);
        }

        // Discovery runs outside the lock; a concurrent miss recomputes the same value.
        let discovered = Arc::new(discover_registries(fs, library_root));
        self.lock()
            .insert(library.to_string(), Arc::clone(&discovered));
        discovered
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Vec<String>>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn discover_registries(fs: &dyn FileSystem, library_root: &Path) -> Vec<String> {
    match fs.list_dir(library_root) {
        Ok(entries) => entries
            .into_iter()
            .filter(|e| e.is_dir() && !e.name.starts_with('.'))
            .map(|e| e.name)
            .collect(),
        Err(e) => {
            tracing::debug!(root = %library_root.display(), error = %e, "no registries discovered");
            Vec::new()
        }
    }
}

/// Maps source files to output files (and back) for resolved targets
pub struct CorrespondenceMapper<'a> {
    fs: &'a dyn FileSystem,
    project_root: &'a Path,
    layout: &'a Layout,
    registries: &'a RegistryCache,
}

impl<'a> CorrespondenceMapper<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        project_root: &'a Path,
        layout: &'a Layout,
        registries: &'a RegistryCache,
    ) -> Self {
        Self {
            fs,
            project_root,
            layout,
            registries,
        }
    }

    /// Every existing output file generated from `source` in `target`
    pub fn find_outputs(&self, source: &SourceFile, target: &ResolvedTarget) -> Vec<PathBuf> {
        if !self.fs.is_dir(&target.root) {
            return Vec::new();
        }
        let Ok(stem) = source.relative_path().strip_prefix(&self.layout.source_root) else {
            return Vec::new();
        };
        let Some(file_name) = stem.file_name().and_then(|n| n.to_str()) else {
            return Vec::new();
        };
        let names = output_names(file_name);

        let dirs: Vec<PathBuf> = match target.kind {
            OutputKind::PlainNpm | OutputKind::PlainJsr => {
                let Some(bin) = self.layout.plain_bin_dir(target.kind) else {
                    return Vec::new();
                };
                vec![target.root.join(bin).join(parent_of(stem))]
            }
            OutputKind::Custom => vec![target.root.join(parent_of(stem))],
            OutputKind::MultiLibrary => {
                let Some(library) = target.sub_name.as_deref() else {
                    return Vec::new();
                };
                let Ok(library_stem) = stem.strip_prefix(self.layout.library_source_dir(library))
                else {
                    return Vec::new();
                };
                self.registries
                    .registries(self.fs, library, &target.root)
                    .iter()
                    .map(|registry| {
                        target
                            .root
                            .join(registry)
                            .join(self.layout.registry_bin_dir(registry))
                            .join(parent_of(library_stem))
                    })
                    .collect()
            }
        };

        let mut outputs = Vec::new();
        for dir in &dirs {
            for name in &names {
                let candidate = dir.join(name);
                if self.fs.exists(&candidate) && !self.fs.is_dir(&candidate) {
                    outputs.push(candidate);
                }
            }
        }
        outputs
    }

    /// Best-matching source for one output file of `target`.
    ///
    /// Inverse of [`find_outputs`](Self::find_outputs): a `.js` output prefers
    /// a `.ts` source over a `.js` one. Returns `None` when no source exists or
    /// the only candidate is the output itself.
    pub fn find_source(&self, output: &Path, target: &ResolvedTarget) -> Option<PathBuf> {
        let relative = output.strip_prefix(&target.root).ok()?;

        let (library_dir, stem) = match target.kind {
            OutputKind::PlainNpm | OutputKind::PlainJsr => {
                let bin = self.layout.plain_bin_dir(target.kind)?;
                (PathBuf::new(), relative.strip_prefix(bin).ok()?)
            }
            OutputKind::Custom => (PathBuf::new(), relative),
            OutputKind::MultiLibrary => {
                let library = target.sub_name.as_deref()?;
                let mut components = relative.components();
                let registry = match components.next()? {
                    Component::Normal(name) => name.to_str()?.to_string(),
                    _ => return None,
                };
                let stem = components
                    .as_path()
                    .strip_prefix(self.layout.registry_bin_dir(&registry))
                    .ok()?;
                (self.layout.library_source_dir(library), stem)
            }
        };

        let file_name = stem.file_name()?.to_str()?;
        let source_dir = self
            .project_root
            .join(&self.layout.source_root)
            .join(library_dir)
            .join(parent_of(stem));

        source_names(file_name)
            .into_iter()
            .map(|name| source_dir.join(name))
            .find(|candidate| candidate != output && self.fs.exists(candidate) && !self.fs.is_dir(candidate))
    }
}

fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Output file names a source file name may compile to
fn output_names(file_name: &str) -> Vec<String> {
    if is_declaration_path(Path::new(file_name)) {
        return vec![file_name.to_string()];
    }
    match file_name.strip_suffix(".ts") {
        Some(base) if !base.is_empty() => vec![format!("{}.js", base), file_name.to_string()],
        _ => vec![file_name.to_string()],
    }
}

/// Source file names an output file name may come from, best first
fn source_names(file_name: &str) -> Vec<String> {
    if is_declaration_path(Path::new(file_name)) {
        return vec![file_name.to_string()];
    }
    match file_name.strip_suffix(".js") {
        Some(base) if !base.is_empty() => vec![format!("{}.ts", base), file_name.to_string()],
        _ => vec![file_name.to_string()],
    }
}
