//! Bundled resources
//!
//! The resources directory holds the optimizer script (`r.js`), the loader
//! (`require.js`), the loader shim (`almond.js`), the default build
//! profiles, and the Rhino jars. Only the two profiles ship with the
//! crate; the JavaScript files and jars are dropped in by the user.

use std::path::{Path, PathBuf};

/// Resources directory shipped alongside the crate
const BUNDLED_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    dir: PathBuf,
}

impl Resources {
    pub const OPTIMIZER: &'static str = "r.js";
    pub const LOADER: &'static str = "require.js";
    pub const LOADER_SHIM: &'static str = "almond.js";
    /// Module name the optimizer uses for the shim
    pub const LOADER_SHIM_MODULE: &'static str = "almond";
    pub const APP_PROFILE: &'static str = "app.build.js";
    pub const MODULE_PROFILE: &'static str = "module.build.js";
    pub const RHINO_JAR: &'static str = "js.jar";
    pub const CLOSURE_JAR: &'static str = "compiler.jar";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory shipped with the crate
    pub fn bundled() -> Self {
        Self::new(BUNDLED_DIR)
    }

    /// Configured directory, or the bundled one
    pub fn from_setting(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::new(dir),
            None => Self::bundled(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of a resource file
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn optimizer_script(&self) -> PathBuf {
        self.path(Self::OPTIMIZER)
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::bundled()
    }
}
