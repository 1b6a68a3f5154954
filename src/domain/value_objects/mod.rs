//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_profile;
mod environment;
mod hash;
mod ignore_patterns;
pub mod module_url;

pub use build_profile::BuildProfile;
pub use environment::EnvironmentSetting;
pub use hash::{copy_and_hash, ContentHash, ContentHasher, COPY_BLOCK_SIZE};
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use module_url::{resolve_require_module, resolve_require_url};
