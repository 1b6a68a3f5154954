//! Collect Use Case
//!
//! Gathers assets from the source directories into the destination
//! storage and builds the asset map post-processing works from.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::{SourceEntry, SourcePaths};
use crate::domain::ports::AssetStorage;
use crate::domain::value_objects::{ContentHash, IgnorePatterns};
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::storage::FileSystemStorage;

/// What collection did with each asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectReport {
    /// Copied into the destination (or would be, on a dry run)
    pub copied: Vec<String>,
    /// Already present with the same content
    pub unmodified: Vec<String>,
    /// Matched an ignore pattern
    pub ignored: Vec<String>,
}

pub struct CollectUseCase {
    sources: Vec<Arc<dyn AssetStorage>>,
    destination: Arc<dyn AssetStorage>,
    ignore: IgnorePatterns,
}

impl CollectUseCase {
    pub fn new(destination: Arc<dyn AssetStorage>, ignore: IgnorePatterns) -> Self {
        Self {
            sources: Vec::new(),
            destination,
            ignore,
        }
    }

    /// Source directories, in priority order. Each must exist.
    pub fn with_source_dirs(mut self, dirs: &[PathBuf]) -> RequireResult<Self> {
        for dir in dirs {
            if !dir.is_dir() {
                return Err(RequireError::ImproperlyConfigured(format!(
                    "static source directory {} does not exist",
                    dir.display()
                )));
            }
            self.sources.push(Arc::new(FileSystemStorage::at(dir)));
        }
        Ok(self)
    }

    pub fn with_source(mut self, source: Arc<dyn AssetStorage>) -> Self {
        self.sources.push(source);
        self
    }

    /// Collect every asset. The first source providing a name wins.
    pub fn execute(&self, dry_run: bool) -> RequireResult<(SourcePaths, CollectReport)> {
        let mut paths = SourcePaths::new();
        let mut report = CollectReport::default();

        for source in &self.sources {
            for name in source.list()? {
                if paths.contains_key(&name) {
                    debug!(asset = %name, source = %source.describe(), "shadowed by earlier source");
                    continue;
                }
                if self.ignore.is_ignored(&name) {
                    if !report.ignored.contains(&name) {
                        report.ignored.push(name);
                    }
                    continue;
                }

                let entry = SourceEntry::new(source.clone(), name.clone());
                if self.is_unmodified(&entry, &name)? {
                    report.unmodified.push(name.clone());
                } else {
                    if !dry_run {
                        self.destination.delete(&name)?;
                        self.destination.save(&name, &mut entry.open()?)?;
                    }
                    debug!(asset = %name, dry_run, "copied");
                    report.copied.push(name.clone());
                }
                paths.insert(name, entry);
            }
        }

        info!(
            copied = report.copied.len(),
            unmodified = report.unmodified.len(),
            ignored = report.ignored.len(),
            "collected static files"
        );
        Ok((paths, report))
    }

    fn is_unmodified(&self, entry: &SourceEntry, name: &str) -> RequireResult<bool> {
        if !self.destination.exists(name) {
            return Ok(false);
        }
        let existing = ContentHash::from_reader(&mut self.destination.open(name)?)?;
        let incoming = ContentHash::from_reader(&mut entry.open()?)?;
        Ok(existing == incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    fn use_case(sources: &[&MemoryStorage], destination: &MemoryStorage) -> CollectUseCase {
        let ignore = IgnorePatterns::from_patterns(&[".*", "*~"]).unwrap();
        sources.iter().fold(
            CollectUseCase::new(Arc::new(destination.clone()), ignore),
            |uc, s| uc.with_source(Arc::new((*s).clone())),
        )
    }

    #[test]
    fn first_source_wins() {
        let first = MemoryStorage::new();
        first.insert("js/main.js", "first");
        let second = MemoryStorage::new();
        second.insert("js/main.js", "second");
        second.insert("js/util.js", "util");
        let destination = MemoryStorage::new();

        let (paths, report) = use_case(&[&first, &second], &destination)
            .execute(false)
            .unwrap();

        assert_eq!(destination.get("js/main.js").unwrap(), b"first");
        assert_eq!(report.copied, vec!["js/main.js", "js/util.js"]);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn ignored_names_are_skipped() {
        let source = MemoryStorage::new();
        source.insert(".gitkeep", "");
        source.insert("js/main.js~", "backup");
        source.insert("js/main.js", "m");
        let destination = MemoryStorage::new();

        let (paths, report) = use_case(&[&source], &destination).execute(false).unwrap();

        assert_eq!(report.ignored, vec![".gitkeep", "js/main.js~"]);
        assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["js/main.js"]);
        assert!(!destination.exists(".gitkeep"));
    }

    #[test]
    fn identical_content_is_not_copied_again() {
        let source = MemoryStorage::new();
        source.insert("js/main.js", "m");
        let destination = MemoryStorage::new();
        destination.insert("js/main.js", "m");

        let (paths, report) = use_case(&[&source], &destination).execute(false).unwrap();

        assert_eq!(report.unmodified, vec!["js/main.js"]);
        assert!(destination.ops().is_empty());
        assert!(paths.contains_key("js/main.js"));
    }

    #[test]
    fn dry_run_copies_nothing() {
        let source = MemoryStorage::new();
        source.insert("js/main.js", "m");
        let destination = MemoryStorage::new();

        let (_, report) = use_case(&[&source], &destination).execute(true).unwrap();

        assert_eq!(report.copied, vec!["js/main.js"]);
        assert!(destination.ops().is_empty());
    }

    #[test]
    fn missing_source_dir_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CollectUseCase::new(Arc::new(MemoryStorage::new()), IgnorePatterns::empty())
            .with_source_dirs(&[dir.path().join("missing")]);

        assert!(result.err().unwrap().is_configuration_error());
    }
}
