//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. Everything that touches the
//! disk or spawns a process lives here.
//!
//! ## Structure
//!
//! - `resources` - Optimizer script, loader, shim and default profiles
//! - `runtime/` - JavaScript runtimes the optimizer runs under
//! - `storage/` - Asset storages (filesystem, in-memory)

pub mod resources;
pub mod runtime;
pub mod storage;

pub use resources::Resources;
pub use runtime::resolve_runtime;
pub use storage::{FileSystemStorage, MemoryStorage};
