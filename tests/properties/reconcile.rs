//! Property tests for output reconciliation.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::sync::Arc;

use proptest::prelude::*;

use requirekit::application::{CompileWorkspace, DigestTable, Reconciliation};
use requirekit::domain::value_objects::{module_url, ContentHash};
use requirekit::{AssetStorage, MemoryStorage, RequireResult, SourcePaths};

type Tree = BTreeMap<String, String>;

fn asset_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.js").unwrap()
}

fn tree() -> impl Strategy<Value = Tree> {
    proptest::collection::btree_map(asset_name(), "[a-z ;(){}]{0,64}", 0..10)
}

/// Pre-build sources and the build output derived from them: some names
/// unchanged, some rewritten, some new
fn build() -> impl Strategy<Value = (Tree, Tree)> {
    (tree(), tree(), any::<u64>()).prop_map(|(sources, extra, seed)| {
        let mut outputs = Tree::new();
        for (i, (name, content)) in sources.iter().enumerate() {
            let rewritten = (seed >> (i % 64)) & 1 == 1;
            let content = if rewritten {
                format!("/* optimized */{}", content)
            } else {
                content.clone()
            };
            outputs.insert(name.clone(), content);
        }
        for (name, content) in extra {
            outputs.entry(name).or_insert(content);
        }
        (sources, outputs)
    })
}

fn workspace_with(outputs: &Tree) -> CompileWorkspace {
    let workspace = CompileWorkspace::open("js").unwrap();
    for (name, content) in outputs {
        let path = module_url::logical_to_path(workspace.build_dir(), name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    workspace
}

fn digests_of(tree: &Tree) -> DigestTable {
    tree.iter()
        .map(|(name, content)| (name.clone(), ContentHash::from_bytes(content.as_bytes())))
        .collect()
}

fn reconcile(
    storage: &MemoryStorage,
    sources: &Tree,
    outputs: &Tree,
    exclude: &[String],
) -> Vec<String> {
    storage.clear_ops();
    let stream = Reconciliation::new(
        workspace_with(outputs),
        digests_of(sources),
        exclude.to_vec(),
        Arc::new(storage.clone()),
        SourcePaths::new(),
        None,
    );
    stream
        .collect::<RequireResult<Vec<_>>>()
        .unwrap()
        .into_iter()
        .map(|asset| asset.processed_name)
        .collect()
}

fn seeded(sources: &Tree) -> MemoryStorage {
    let storage = MemoryStorage::new();
    for (name, content) in sources {
        storage.insert(name.clone(), content.clone());
    }
    storage
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly the outputs whose digest changed are saved.
    #[test]
    fn property_saves_only_changed_outputs((sources, outputs) in build()) {
        let storage = seeded(&sources);

        let saved: BTreeSet<String> =
            reconcile(&storage, &sources, &outputs, &[]).into_iter().collect();

        let expected: BTreeSet<String> = outputs
            .iter()
            .filter(|(name, content)| sources.get(*name) != Some(*content))
            .map(|(name, _)| name.clone())
            .collect();
        prop_assert_eq!(&saved, &expected);
        prop_assert_eq!(storage.saved().into_iter().collect::<BTreeSet<_>>(), expected);
        for (name, content) in &outputs {
            prop_assert_eq!(storage.get(name), Some(content.clone().into_bytes()));
        }
    }

    /// PROPERTY: a second build over unchanged sources reports nothing.
    #[test]
    fn property_second_build_is_empty((sources, outputs) in build()) {
        let storage = seeded(&sources);
        reconcile(&storage, &sources, &outputs, &[]);

        // The stored assets are the sources of the next build
        let stored: Tree = storage
            .list()
            .unwrap()
            .into_iter()
            .map(|name| {
                let content = String::from_utf8(storage.get(&name).unwrap()).unwrap();
                (name, content)
            })
            .collect();
        let again = reconcile(&storage, &stored, &outputs, &[]);

        prop_assert!(again.is_empty(), "re-saved {:?}", again);
        prop_assert!(storage.ops().is_empty());
    }

    /// PROPERTY: excluded outputs are never saved, and are deleted only if
    /// they existed before the build.
    #[test]
    fn property_excluded_never_saved(
        (sources, outputs) in build(),
        mask in any::<u64>(),
    ) {
        let exclude: Vec<String> = outputs
            .keys()
            .enumerate()
            .filter(|(i, _)| (mask >> (i % 64)) & 1 == 1)
            .map(|(_, name)| name.clone())
            .collect();
        let storage = seeded(&sources);

        let reported = reconcile(&storage, &sources, &outputs, &exclude);

        let saved: BTreeSet<String> = storage.saved().into_iter().collect();
        let deleted: BTreeSet<String> = storage.deleted().into_iter().collect();
        for name in &exclude {
            prop_assert!(!saved.contains(name), "{} was saved", name);
            prop_assert!(!reported.contains(name), "{} was reported", name);
            prop_assert_eq!(deleted.contains(name), sources.contains_key(name));
        }
    }
}
