//! PostProcessor port - a step chained after the optimizer

use crate::domain::entities::{ProcessedAsset, SourcePaths};
use crate::error::RequireResult;

/// A further post-processing step run once the optimizer output has been
/// reconciled. Receives the asset map with optimized entries repointed at
/// the build output and excluded entries removed.
pub trait PostProcessor {
    fn post_process(&self, paths: &SourcePaths) -> RequireResult<Vec<ProcessedAsset>>;
}
