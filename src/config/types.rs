//! Configuration types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigWarning};
use crate::domain::entities::StandaloneModuleSpec;
use crate::domain::value_objects::{
    resolve_require_url, BuildProfile, EnvironmentSetting, IgnoreError, IgnorePatterns,
};
use crate::error::RequireResult;
use crate::infrastructure::resources::Resources;

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "requirekit.toml";

/// Written by the optimizer into every build directory
pub const OPTIMIZER_BUILD_LOG: &str = "build.txt";

/// Optimizer and template settings (`[require]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequireConfig {
    /// Base URL of all module paths, relative to the storage root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Loader script, relative to `base_url`
    #[serde(default = "default_require_js")]
    pub require_js: String,

    #[serde(default)]
    pub build_profile: BuildProfile,

    /// Serve unoptimized modules and skip nothing in templates
    #[serde(default)]
    pub debug: bool,

    /// Names never written back from the build output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(default)]
    pub environment: EnvironmentSetting,

    /// Directory holding r.js, require.js, almond.js and the default profiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_dir: Option<PathBuf>,

    #[serde(default)]
    pub standalone_modules: BTreeMap<String, StandaloneModuleSpec>,
}

impl Default for RequireConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            require_js: default_require_js(),
            build_profile: BuildProfile::default(),
            debug: false,
            exclude: None,
            environment: EnvironmentSetting::default(),
            resources_dir: None,
            standalone_modules: BTreeMap::new(),
        }
    }
}

fn default_base_url() -> String {
    "js".to_string()
}

fn default_require_js() -> String {
    "require.js".to_string()
}

impl RequireConfig {
    /// Effective exclude set.
    ///
    /// Without an explicit list this is the optimizer's build log plus the
    /// user build profile, which the optimizer copies into its output.
    pub fn exclude_names(&self) -> Vec<String> {
        if let Some(exclude) = &self.exclude {
            return exclude.clone();
        }
        let mut names = vec![OPTIMIZER_BUILD_LOG.to_string()];
        if let Some(profile) = self.build_profile.user_path() {
            names.push(resolve_require_url(&self.base_url, profile));
        }
        names
    }

    /// Whether a build spawns the optimizer at least once
    pub fn needs_optimizer(&self) -> bool {
        !self.build_profile.is_disabled() || !self.standalone_modules.is_empty()
    }

    pub fn resources(&self) -> Resources {
        Resources::from_setting(self.resources_dir.as_deref())
    }
}

/// Source and destination of collected assets (`[staticfiles]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// Source directories; the first one wins on name collisions
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Destination storage root
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Public URL prefix of the destination storage
    #[serde(default = "default_url")]
    pub url: String,

    /// Gitignore-style patterns skipped while collecting
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Write `staticfiles.json` after post-processing
    #[serde(default)]
    pub manifest: bool,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            root: default_root(),
            url: default_url(),
            ignore: default_ignore(),
            manifest: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("static")
}

fn default_url() -> String {
    "/static/".to_string()
}

fn default_ignore() -> Vec<String> {
    vec![".*".to_string(), "*~".to_string()]
}

impl StaticFilesConfig {
    pub fn ignore_patterns(&self) -> Result<IgnorePatterns, IgnoreError> {
        IgnorePatterns::from_patterns(&self.ignore)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub require: RequireConfig,

    #[serde(default)]
    pub staticfiles: StaticFilesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RequireResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RequireResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `requirekit.toml` from the project root, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (REQUIREKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Make relative paths absolute against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let absolutize = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.staticfiles.dirs.iter_mut().for_each(absolutize);
        absolutize(&mut self.staticfiles.root);
        if let Some(dir) = self.require.resources_dir.as_mut() {
            absolutize(dir);
        }
        self
    }
}
