//! Project layout conventions shared by the scanner and the mapper

use std::path::PathBuf;

use super::OutputKind;

/// Registry directory whose build keeps TypeScript sources
pub const JSR_REGISTRY: &str = "jsr";

/// Where sources live and where each distribution kind puts its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Source root, relative to the project root
    pub source_root: PathBuf,
    /// Directory under the source root holding one sub-directory per library
    pub libs_dir: PathBuf,
    /// Conventional output directory of npm-flavoured builds
    pub npm_bin_dir: PathBuf,
    /// Conventional output directory of jsr-flavoured builds
    pub jsr_bin_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            libs_dir: PathBuf::from("libs"),
            npm_bin_dir: PathBuf::from("bin"),
            jsr_bin_dir: PathBuf::from("src"),
        }
    }
}

impl Layout {
    /// Bin directory of a plain target; `None` for kinds without one
    pub fn plain_bin_dir(&self, kind: OutputKind) -> Option<&PathBuf> {
        match kind {
            OutputKind::PlainNpm => Some(&self.npm_bin_dir),
            OutputKind::PlainJsr => Some(&self.jsr_bin_dir),
            OutputKind::MultiLibrary | OutputKind::Custom => None,
        }
    }

    /// Bin directory inside one registry sub-tree of a library
    pub fn registry_bin_dir(&self, registry: &str) -> &PathBuf {
        if registry == JSR_REGISTRY {
            &self.jsr_bin_dir
        } else {
            &self.npm_bin_dir
        }
    }

    /// Source directory of one library, relative to the source root
    pub fn library_source_dir(&self, library: &str) -> PathBuf {
        self.libs_dir.join(library)
    }
}
