//! SourceEntry entity - where a known asset's bytes can be read from

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::domain::ports::{AssetStorage, StorageResult};

/// Storage handle plus the path inside it.
#[derive(Clone)]
pub struct SourceEntry {
    pub storage: Arc<dyn AssetStorage>,
    pub path: String,
}

impl SourceEntry {
    pub fn new(storage: Arc<dyn AssetStorage>, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn open(&self) -> StorageResult<Box<dyn Read + Send>> {
        self.storage.open(&self.path)
    }
}

impl fmt::Debug for SourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceEntry")
            .field("storage", &self.storage.describe())
            .field("path", &self.path)
            .finish()
    }
}

/// Every known asset, keyed by logical name.
pub type SourcePaths = BTreeMap<String, SourceEntry>;
