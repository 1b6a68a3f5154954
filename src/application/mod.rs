//! Application Layer
//!
//! Use cases that orchestrate the domain and infrastructure layers.
//!
//! ## Build pipeline
//!
//! - `workspace` - Temporary compile and build trees for one run
//! - `materialize` - Copy assets into the compile tree, recording digests
//! - `optimizer` - r.js command line and process execution
//! - `standalone` - Per-module builds bundled with almond
//! - `reconcile` - Lazy write-back of changed build output
//! - `pipeline` - `RequirePostProcessor`, tying the stages together
//!
//! ## Other use cases
//!
//! - `reference` - Script tags for a module
//! - `collect` - Gather static files into the destination storage
//! - `init` - Copy the loader and default profiles into a project
//! - `manifest` - Chained post-processor writing `staticfiles.json`

pub mod collect;
pub mod init;
pub mod manifest;
pub mod materialize;
pub mod optimizer;
pub mod pipeline;
pub mod reconcile;
pub mod reference;
pub mod standalone;
pub mod workspace;

pub use collect::{CollectReport, CollectUseCase};
pub use init::{InitAction, InitEntry, InitOptions, InitUseCase};
pub use manifest::{ManifestPostProcessor, MANIFEST_NAME};
pub use materialize::{materialize, DigestTable};
pub use optimizer::{Optimizer, OptimizerOptions};
pub use pipeline::{PostProcessOptions, RequirePostProcessor};
pub use reconcile::{Outcome, Reconciliation};
pub use reference::ModuleReference;
pub use standalone::compile_standalone;
pub use workspace::CompileWorkspace;
