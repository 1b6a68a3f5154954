//! In-memory Storage
//!
//! Keeps assets in a map and records every mutation, so callers can
//! assert exactly which saves and deletes a pipeline performed.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{AssetStorage, StorageError, StorageResult};

/// A mutation applied to a [`MemoryStorage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    Save(String),
    Delete(String),
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<String, Vec<u8>>,
    ops: Vec<StorageOp>,
}

/// Shared in-memory storage
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
    base_url: String,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::default(),
            base_url: base_url.into(),
        }
    }

    /// Seed an asset without recording an operation
    pub fn insert(&self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.lock().files.insert(name.into(), content.into());
    }

    /// Current content of an asset
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.lock().files.get(name).cloned()
    }

    /// Every mutation since creation (or the last `clear_ops`)
    pub fn ops(&self) -> Vec<StorageOp> {
        self.lock().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.lock().ops.clear();
    }

    /// Names passed to `save`, in order
    pub fn saved(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                StorageOp::Save(name) => Some(name),
                StorageOp::Delete(_) => None,
            })
            .collect()
    }

    /// Names passed to `delete`, in order
    pub fn deleted(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                StorageOp::Delete(name) => Some(name),
                StorageOp::Save(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another thread panicked mid-test;
        // the map itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AssetStorage for MemoryStorage {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn open(&self, name: &str) -> StorageResult<Box<dyn Read + Send>> {
        let content = self
            .get(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        Ok(Box::new(Cursor::new(content)))
    }

    fn save(&self, name: &str, content: &mut dyn Read) -> StorageResult<()> {
        let mut buf = Vec::new();
        content.read_to_end(&mut buf)?;
        let mut inner = self.lock();
        inner.files.insert(name.to_string(), buf);
        inner.ops.push(StorageOp::Save(name.to_string()));
        Ok(())
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let mut inner = self.lock();
        inner.files.remove(name);
        inner.ops.push(StorageOp::Delete(name.to_string()));
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.lock().files.contains_key(name)
    }

    fn url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        Ok(self.lock().files.keys().cloned().collect())
    }
}
