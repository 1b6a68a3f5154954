//! Output reconciler
//!
//! Walks the optimizer output and writes back only what the build changed.
//! The walk is lazy: nothing is saved until the stream is pulled, and the
//! compile workspace lives exactly as long as the stream does.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ignore::{Walk, WalkBuilder};
use tracing::{debug, info, trace, warn};

use super::materialize::DigestTable;
use super::workspace::CompileWorkspace;
use crate::domain::entities::{ProcessedAsset, SourceEntry, SourcePaths};
use crate::domain::ports::{AssetStorage, PostProcessor};
use crate::domain::value_objects::{module_url, ContentHash};
use crate::error::RequireResult;
use crate::infrastructure::storage::FileSystemStorage;

/// How one build output file was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Same digest as before the build
    Unchanged,
    /// New or different content; saved to storage
    Saved,
    /// In the exclude set; removed from storage if it was a source asset
    Excluded { deleted: bool },
}

enum Stage {
    Walking(Walk),
    Delegating(std::vec::IntoIter<ProcessedAsset>),
    Done,
}

/// Everything a live reconciliation owns besides the asset map
struct BuildOutput {
    workspace: CompileWorkspace,
    digests: DigestTable,
    exclude: Vec<String>,
    storage: Arc<dyn AssetStorage>,
    build_storage: Arc<dyn AssetStorage>,
    delegate: Option<Arc<dyn PostProcessor>>,
}

/// Single-pass stream of saved assets.
///
/// Yields one report per saved asset, then the reports of the chained
/// post-processor, if any. The first error ends the stream.
pub struct Reconciliation {
    stage: Stage,
    build: Option<BuildOutput>,
    paths: SourcePaths,
}

impl Reconciliation {
    /// An already exhausted stream
    pub fn empty() -> Self {
        Self {
            stage: Stage::Done,
            build: None,
            paths: SourcePaths::new(),
        }
    }

    /// Reconcile the build tree of `workspace` against `digests`.
    ///
    /// Takes ownership of the workspace; it is removed once the stream is
    /// exhausted, fails, or is dropped.
    pub fn new(
        workspace: CompileWorkspace,
        digests: DigestTable,
        exclude: Vec<String>,
        storage: Arc<dyn AssetStorage>,
        paths: SourcePaths,
        delegate: Option<Arc<dyn PostProcessor>>,
    ) -> Self {
        let walk = WalkBuilder::new(workspace.build_dir())
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();
        let build_storage: Arc<dyn AssetStorage> =
            Arc::new(FileSystemStorage::at(workspace.build_dir()));

        Self {
            stage: Stage::Walking(walk),
            build: Some(BuildOutput {
                workspace,
                digests,
                exclude,
                storage,
                build_storage,
                delegate,
            }),
            paths,
        }
    }

    fn next_saved(&mut self) -> Option<RequireResult<ProcessedAsset>> {
        loop {
            let entry = match &mut self.stage {
                Stage::Walking(walk) => walk.next()?,
                _ => return None,
            };
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let build = self.build.as_ref()?;
            let Some(name) = module_url::path_to_logical(build.workspace.build_dir(), entry.path())
            else {
                warn!(path = %entry.path().display(), "skipping build output without a UTF-8 name");
                continue;
            };
            match build.reconcile(&name, entry.path(), &mut self.paths) {
                Ok(Outcome::Saved) => return Some(Ok(ProcessedAsset::saved(name))),
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn delegate_reports(&self) -> RequireResult<Vec<ProcessedAsset>> {
        match self.build.as_ref().and_then(|b| b.delegate.as_ref()) {
            Some(delegate) => delegate.post_process(&self.paths),
            None => Ok(Vec::new()),
        }
    }

    fn finish(&mut self) {
        self.stage = Stage::Done;
        if let Some(build) = self.build.take() {
            build.workspace.close();
        }
    }
}

impl BuildOutput {
    /// Classify one build output file and apply the result to storage
    fn reconcile(&self, name: &str, path: &Path, paths: &mut SourcePaths) -> RequireResult<Outcome> {
        if self.exclude.iter().any(|e| e == name) {
            let deleted = self.digests.contains_key(name);
            if deleted {
                paths.remove(name);
                self.storage.delete(name)?;
                debug!(asset = %name, "removed excluded asset");
            } else {
                trace!(asset = %name, "skipped excluded output");
            }
            return Ok(Outcome::Excluded { deleted });
        }

        let digest = ContentHash::from_reader(&mut File::open(path)?)?;
        if self.digests.get(name) == Some(&digest) {
            trace!(asset = %name, "unchanged");
            return Ok(Outcome::Unchanged);
        }

        paths.insert(
            name.to_string(),
            SourceEntry::new(self.build_storage.clone(), name),
        );
        self.storage.delete(name)?;
        self.storage.save(name, &mut File::open(path)?)?;
        info!(asset = %name, "saved optimized asset");
        Ok(Outcome::Saved)
    }
}

impl Iterator for Reconciliation {
    type Item = RequireResult<ProcessedAsset>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Stage::Delegating(reports) = &mut self.stage {
                if let Some(asset) = reports.next() {
                    return Some(Ok(asset));
                }
                self.finish();
            }
            if matches!(self.stage, Stage::Done) {
                return None;
            }

            match self.next_saved() {
                Some(Ok(asset)) => return Some(Ok(asset)),
                Some(Err(e)) => {
                    self.finish();
                    return Some(Err(e));
                }
                None => match self.delegate_reports() {
                    Ok(reports) => self.stage = Stage::Delegating(reports.into_iter()),
                    Err(e) => {
                        self.finish();
                        return Some(Err(e));
                    }
                },
            }
        }
    }
}

impl std::iter::FusedIterator for Reconciliation {}
