//! requirekit - r.js optimization for static asset pipelines
//!
//! requirekit copies a project's static assets into a private workspace,
//! runs the r.js optimizer over them (plus one almond-bundled build per
//! standalone module), and writes back only the files the build changed.
//! It also renders the script tags that load a module in development or
//! production.
//!
//! ```ignore
//! use std::sync::Arc;
//! use requirekit::{Config, FileSystemStorage, PostProcessOptions, RequirePostProcessor};
//!
//! let config = Config::load_or_default(Some(project_root));
//! let storage = Arc::new(FileSystemStorage::new(&config.staticfiles.root, &config.staticfiles.url));
//! let processor = RequirePostProcessor::new(config.require.clone(), storage);
//! for report in processor.post_process(paths, &PostProcessOptions::new())? {
//!     println!("{}", report?.processed_name);
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CollectUseCase, InitUseCase, ModuleReference, PostProcessOptions, Reconciliation,
    RequirePostProcessor,
};
pub use config::{Config, RequireConfig, StaticFilesConfig};
pub use domain::entities::{ProcessedAsset, SourceEntry, SourcePaths, StandaloneModuleSpec};
pub use domain::ports::{AssetStorage, PostProcessor, RuntimeLauncher};
pub use error::{RequireError, RequireResult};
pub use infrastructure::{FileSystemStorage, MemoryStorage, Resources};
