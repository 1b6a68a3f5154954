//! Storage Implementations
//!
//! Concrete implementations of the AssetStorage port.

mod filesystem;
mod memory;

pub use filesystem::FileSystemStorage;
pub use memory::{MemoryStorage, StorageOp};
