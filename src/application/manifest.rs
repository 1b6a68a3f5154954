//! Manifest post-processor
//!
//! Writes `staticfiles.json`, mapping every known asset to the digest of
//! its final content. Chained after the optimizer it sees optimized
//! assets at their build output location.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::entities::{ProcessedAsset, SourcePaths};
use crate::domain::ports::{AssetStorage, PostProcessor};
use crate::domain::value_objects::ContentHash;
use crate::error::RequireResult;

pub const MANIFEST_NAME: &str = "staticfiles.json";
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    version: u32,
    files: BTreeMap<&'a str, String>,
}

pub struct ManifestPostProcessor {
    storage: Arc<dyn AssetStorage>,
}

impl ManifestPostProcessor {
    pub fn new(storage: Arc<dyn AssetStorage>) -> Self {
        Self { storage }
    }
}

impl PostProcessor for ManifestPostProcessor {
    fn post_process(&self, paths: &SourcePaths) -> RequireResult<Vec<ProcessedAsset>> {
        let mut files = BTreeMap::new();
        for (name, entry) in paths {
            if name == MANIFEST_NAME {
                continue;
            }
            let digest = ContentHash::from_reader(&mut entry.open()?)?;
            files.insert(name.as_str(), digest.to_string());
        }

        let manifest = Manifest {
            version: MANIFEST_VERSION,
            files,
        };
        let mut json = serde_json::to_vec_pretty(&manifest).map_err(std::io::Error::from)?;
        json.push(b'\n');

        self.storage.delete(MANIFEST_NAME)?;
        self.storage.save(MANIFEST_NAME, &mut json.as_slice())?;
        info!(entries = manifest.files.len(), "wrote {}", MANIFEST_NAME);

        Ok(vec![ProcessedAsset::saved(MANIFEST_NAME)])
    }
}
