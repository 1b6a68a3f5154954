//! File System Storage
//!
//! Implements the AssetStorage port for a directory on local disk.

use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use tempfile::NamedTempFile;

use crate::domain::ports::{AssetStorage, StorageError, StorageResult};
use crate::domain::value_objects::module_url;

/// Directory-backed storage
///
/// Writes are atomic (tempfile + rename in the destination directory).
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    root: PathBuf,
    base_url: String,
}

impl FileSystemStorage {
    /// Create a storage rooted at `root` whose URLs start with `base_url`
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Storage without a public URL prefix (workspaces, source directories)
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::new(root, "")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a logical name, refusing names that leave the root
    pub fn path(&self, name: &str) -> StorageResult<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || name.is_empty() {
            return Err(StorageError::PathEscape(name.to_string()));
        }
        Ok(module_url::logical_to_path(&self.root, name))
    }
}

impl AssetStorage for FileSystemStorage {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn open(&self, name: &str) -> StorageResult<Box<dyn Read + Send>> {
        let path = self.path(name)?;
        match fs::File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, name: &str, content: &mut dyn Read) -> StorageResult<()> {
        let path = self.path(name)?;
        let parent = path
            .parent()
            .ok_or_else(|| StorageError::PathEscape(name.to_string()))?;
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        io::copy(content, tmp.as_file_mut())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.path(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn url(&self, name: &str) -> String {
        let name = name.trim_start_matches('/');
        if self.base_url.is_empty() {
            return name.to_string();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(true)
            .build();
        for entry in walker {
            let entry = entry.map_err(|e| StorageError::Other(e.to_string()))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if let Some(name) = module_url::path_to_logical(&self.root, entry.path()) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
