//! Init Use Case
//!
//! Copies the loader and the default build profiles into a static source
//! directory so a project can start customizing them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::domain::value_objects::module_url;
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::resources::Resources;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite files that already exist
    pub force: bool,
    /// Destination; defaults to the first static source directory
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitAction {
    Copied,
    Skipped,
}

/// One resource handled by init
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitEntry {
    pub resource: String,
    pub destination: PathBuf,
    pub action: InitAction,
}

impl fmt::Display for InitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            InitAction::Copied => write!(
                f,
                "Copied {} to {}.",
                self.resource,
                self.destination.display()
            ),
            InitAction::Skipped => write!(
                f,
                "{} already exists, skipping.",
                self.destination.display()
            ),
        }
    }
}

pub struct InitUseCase<'a> {
    config: &'a Config,
    resources: Resources,
}

impl<'a> InitUseCase<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            resources: config.require.resources(),
        }
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// `(resource, name relative to the base URL)` pairs to copy
    pub fn plan(&self) -> Vec<(&'static str, String)> {
        let require = &self.config.require;
        let mut plan = vec![(Resources::LOADER, require.require_js.clone())];
        if let Some(profile) = require.build_profile.user_path() {
            plan.push((Resources::APP_PROFILE, profile.to_string()));
        }
        for spec in require.standalone_modules.values() {
            if let Some(profile) = spec.build_profile_path() {
                plan.push((Resources::MODULE_PROFILE, profile));
            }
        }
        plan
    }

    pub fn execute(&self, options: &InitOptions) -> RequireResult<Vec<InitEntry>> {
        let dst_dir = self.destination_dir(options)?;
        let base = dst_dir.join(&self.config.require.base_url);

        let mut entries = Vec::new();
        for (resource, name) in self.plan() {
            let destination = module_url::normalize_path(&base.join(&name));
            let action = if destination.exists() && !options.force {
                InitAction::Skipped
            } else {
                self.copy(resource, &destination)?;
                InitAction::Copied
            };
            debug!(resource, destination = %destination.display(), ?action, "init");
            entries.push(InitEntry {
                resource: resource.to_string(),
                destination,
                action,
            });
        }
        Ok(entries)
    }

    fn destination_dir(&self, options: &InitOptions) -> RequireResult<PathBuf> {
        options
            .dir
            .clone()
            .or_else(|| self.config.staticfiles.dirs.first().cloned())
            .ok_or_else(|| {
                RequireError::ImproperlyConfigured(
                    "no static source directories configured, and no --dir option specified"
                        .to_string(),
                )
            })
    }

    fn copy(&self, resource: &str, destination: &Path) -> RequireResult<()> {
        let source = self.resources.path(resource);
        if !source.is_file() {
            return Err(RequireError::ImproperlyConfigured(format!(
                "{} not found in resources directory {} (set [require] resources_dir or REQUIREKIT_RESOURCES_DIR)",
                resource,
                self.resources.dir().display()
            )));
        }
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, destination)?;
        Ok(())
    }
}
