//! Property tests for asset materialization.

use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;

use proptest::prelude::*;

use requirekit::application::{materialize, CompileWorkspace};
use requirekit::domain::value_objects::{module_url, ContentHash};
use requirekit::{AssetStorage, MemoryStorage, SourceEntry, SourcePaths};

/// Asset names like `js/lib/a.js`; directories never carry a dot, so no
/// name is a prefix directory of another.
fn asset_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.(js|css|txt)").unwrap()
}

fn assets() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        asset_name(),
        proptest::collection::vec(any::<u8>(), 0..4096),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the recorded digest of every asset matches a re-read of
    /// its copy in the compile tree.
    #[test]
    fn property_materialized_digest_matches_copy(files in assets()) {
        let storage = MemoryStorage::new();
        for (name, content) in &files {
            storage.insert(name.clone(), content.clone());
        }
        let shared: Arc<dyn AssetStorage> = Arc::new(storage);
        let paths: SourcePaths = files
            .keys()
            .map(|name| (name.clone(), SourceEntry::new(shared.clone(), name.clone())))
            .collect();
        let workspace = CompileWorkspace::open("js").unwrap();

        let digests = materialize(&paths, &workspace).unwrap();

        prop_assert_eq!(digests.len(), files.len());
        for (name, content) in &files {
            let copied = fs::read(module_url::logical_to_path(workspace.compile_dir(), name)).unwrap();
            prop_assert_eq!(&copied, content);
            prop_assert_eq!(&digests[name], &ContentHash::from_bytes(&copied));
        }
    }

    /// PROPERTY: digesting a stream in arbitrary chunks equals digesting it
    /// at once.
    #[test]
    fn property_digest_is_chunking_independent(
        content in proptest::collection::vec(any::<u8>(), 0..20_000)
    ) {
        let mut reader = content.as_slice();
        let streamed = ContentHash::from_reader(&mut reader).unwrap();
        prop_assert_eq!(streamed, ContentHash::from_bytes(&content));
    }
}
