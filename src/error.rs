//! Error types for requirekit
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StorageError;
use crate::domain::value_objects::IgnoreError;

/// Result type alias for requirekit operations
pub type RequireResult<T> = Result<T, RequireError>;

/// Main error type for requirekit operations
#[derive(Error, Debug)]
pub enum RequireError {
    /// Automatic runtime selection found none of its candidates
    #[error("no environments detected: {candidates}")]
    EnvironmentResolution { candidates: String },

    /// Probing a runtime failed for a reason other than "not installed"
    #[error("failed to probe for the {runtime} runtime: {source}")]
    EnvironmentProbe {
        runtime: String,
        #[source]
        source: std::io::Error,
    },

    /// The optimizer process exited unsuccessfully
    #[error("error while running r.js optimizer")]
    Optimization { code: Option<i32> },

    /// The optimizer process could not be spawned
    #[error("failed to launch optimizer '{program}': {source}")]
    OptimizerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A standalone module has no `out` option
    #[error("no 'out' option specified for module '{module}' in standalone_modules setting")]
    MissingStandaloneOut { module: String },

    /// Any other configuration problem
    #[error("improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk failure
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Invalid ignore pattern in configuration
    #[error("invalid ignore pattern: {0}")]
    IgnorePattern(#[from] IgnoreError),
}

impl RequireError {
    /// True for errors caused by settings rather than the environment.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RequireError::MissingStandaloneOut { .. }
                | RequireError::ImproperlyConfigured(_)
                | RequireError::InvalidConfig { .. }
                | RequireError::IgnorePattern(_)
        )
    }
}
