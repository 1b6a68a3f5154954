//! ProcessedAsset entity - one report emitted by post-processing

use serde::Serialize;

/// A storage name that post-processing wrote.
///
/// Mirrors the `(original, processed, was_processed)` triple of static
/// file post-processors; the optimizer never renames, so both names match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedAsset {
    pub original_name: String,
    pub processed_name: String,
    pub processed: bool,
}

impl ProcessedAsset {
    /// Report for an asset saved under its own name
    pub fn saved(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            processed_name: name,
            processed: true,
        }
    }
}
