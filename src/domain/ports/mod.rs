//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod post_processor;
pub mod runtime;
pub mod storage;

pub use post_processor::PostProcessor;
pub use runtime::RuntimeLauncher;
pub use storage::{AssetStorage, StorageError, StorageResult};
