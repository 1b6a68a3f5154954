//! Domain Entities
//!
//! - `StandaloneModuleSpec` - a module bundled with the loader shim
//! - `SourceEntry` - where a known asset is read from
//! - `ProcessedAsset` - a post-processing report

mod processed;
mod source;
mod standalone;

pub use processed::ProcessedAsset;
pub use source::{SourceEntry, SourcePaths};
pub use standalone::{DevelTag, StandaloneModuleSpec};
