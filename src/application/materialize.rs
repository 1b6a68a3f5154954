//! Asset materializer
//!
//! Copies every known asset into the compile tree, hashing each one as it
//! streams through.

use std::collections::BTreeMap;
use std::fs::{self, File};

use tracing::{debug, info};

use super::workspace::CompileWorkspace;
use crate::domain::entities::SourcePaths;
use crate::domain::value_objects::{copy_and_hash, ContentHash};
use crate::error::RequireResult;
use crate::infrastructure::storage::FileSystemStorage;

/// Pre-build digest of every materialized asset, keyed by logical name
pub type DigestTable = BTreeMap<String, ContentHash>;

/// Copy `paths` into the workspace compile tree.
///
/// Any source that cannot be opened or copied aborts the build.
pub fn materialize(paths: &SourcePaths, workspace: &CompileWorkspace) -> RequireResult<DigestTable> {
    let target = FileSystemStorage::at(workspace.compile_dir());
    let mut digests = DigestTable::new();

    for (name, entry) in paths {
        let dst_path = target.path(name)?;
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut src = entry.open()?;
        let mut dst = File::create(&dst_path)?;
        let digest = copy_and_hash(&mut *src, &mut dst)?;
        debug!(asset = %name, %digest, "materialized");
        digests.insert(name.clone(), digest);
    }

    info!(count = digests.len(), "copied assets into compile workspace");
    Ok(digests)
}
