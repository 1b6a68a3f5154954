//! AssetStorage port - abstraction over named asset persistence
//!
//! The pipeline only needs to read, write, delete and enumerate assets by
//! logical (slash-separated) name, and to turn a name into a public URL.

use std::io::Read;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Debug)]
pub enum StorageError {
    /// No asset with this name
    NotFound(String),
    /// Name resolves outside the storage root
    PathEscape(String),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound(name) => write!(f, "asset not found: {}", name),
            StorageError::PathEscape(name) => {
                write!(f, "asset name '{}' escapes the storage root", name)
            }
            StorageError::Io(err) => write!(f, "I/O error: {}", err),
            StorageError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract asset storage
///
/// Implementations:
/// - `FileSystemStorage` - a directory on local disk
/// - `MemoryStorage` - in-memory, records every mutation
pub trait AssetStorage: Send + Sync {
    /// Human-readable location (for logging)
    fn describe(&self) -> String;

    /// Open an asset for streaming reads
    fn open(&self, name: &str) -> StorageResult<Box<dyn Read + Send>>;

    /// Save an asset, replacing any previous content
    fn save(&self, name: &str, content: &mut dyn Read) -> StorageResult<()>;

    /// Delete an asset; deleting a missing asset is not an error
    fn delete(&self, name: &str) -> StorageResult<()>;

    /// Check if an asset exists
    fn exists(&self, name: &str) -> bool;

    /// Public URL for an asset
    fn url(&self, name: &str) -> String;

    /// Enumerate every asset name, sorted
    fn list(&self) -> StorageResult<Vec<String>>;
}
