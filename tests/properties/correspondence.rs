//! Property tests for source-to-output correspondence.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use spellcaster::domain::entities::SourceFile;
use spellcaster::domain::services::{CorrespondenceMapper, RegistryCache};
use spellcaster::domain::value_objects::{Layout, OutputKind, ResolvedTarget};
use spellcaster::LocalFs;

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "x\n").unwrap();
}

fn stem() -> impl Strategy<Value = String> {
    // `<dir>/<name>`; duplicates are removed per case.
    ("(a|b|libs/sdk|libs/cli)", "[a-z]{1,6}").prop_map(|(dir, name)| format!("{}/{}", dir, name))
}

fn extension() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ts"), Just("d.ts"), Just("js"), Just("json")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Two distinct sources never claim the same output file.
    #[test]
    fn property_correspondence_sets_are_disjoint(
        entries in proptest::collection::vec((stem(), extension()), 1..=10),
    ) {
        let project = TempDir::new().unwrap();
        let root = project.path();
        let layout = Layout::default();

        let mut seen_stems = HashSet::new();
        let mut sources = Vec::new();
        for (stem, ext) in entries {
            if !seen_stems.insert(stem.clone()) {
                continue;
            }
            let relative = PathBuf::from(format!("src/{}.{}", stem, ext));
            touch(&root.join(&relative));
            sources.push(SourceFile::new(root.join(&relative), relative, 1, Vec::new()));

            // Every output name any source could map to, in every target.
            for out in [
                format!("dist-npm/bin/{}.js", stem),
                format!("dist-npm/bin/{}.{}", stem, ext),
                format!("dist-jsr/src/{}.{}", stem, ext),
            ] {
                touch(&root.join(out));
            }
            if let Some(lib_stem) = stem.strip_prefix("libs/") {
                let (library, rest) = lib_stem.split_once('/').unwrap();
                for registry in ["npm", "jsr"] {
                    let bin = if registry == "jsr" { "src" } else { "bin" };
                    touch(&root.join(format!("dist-libs/{}/{}/{}/{}.js", library, registry, bin, rest)));
                    touch(&root.join(format!("dist-libs/{}/{}/{}/{}.{}", library, registry, bin, rest, ext)));
                }
            }
        }

        let targets = vec![
            ResolvedTarget::new(OutputKind::PlainNpm, None, root.join("dist-npm")),
            ResolvedTarget::new(OutputKind::PlainJsr, None, root.join("dist-jsr")),
            ResolvedTarget::new(OutputKind::MultiLibrary, Some("sdk".into()), root.join("dist-libs/sdk")),
            ResolvedTarget::new(OutputKind::MultiLibrary, Some("cli".into()), root.join("dist-libs/cli")),
        ];

        let registries = RegistryCache::new();
        let mapper = CorrespondenceMapper::new(&LocalFs, root, &layout, &registries);

        for target in &targets {
            let mut claimed: HashSet<PathBuf> = HashSet::new();
            for source in &sources {
                for output in mapper.find_outputs(source, target) {
                    prop_assert!(
                        claimed.insert(output.clone()),
                        "{} claimed twice in {}",
                        output.display(),
                        target
                    );
                }
            }
        }
    }
}
