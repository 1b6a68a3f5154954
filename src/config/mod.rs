//! Configuration module for requirekit
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REQUIREKIT_*)
//! 3. Project config (requirekit.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    Config, RequireConfig, StaticFilesConfig, CONFIG_FILE_NAME, OPTIMIZER_BUILD_LOG,
};
