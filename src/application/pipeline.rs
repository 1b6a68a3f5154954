//! Optimizing post-processor
//!
//! Runs after assets are collected:
//!
//! 1. Copy every asset into a private compile workspace, hashing as it goes
//! 2. Run the r.js optimizer over the compile tree (unless disabled)
//! 3. Build each standalone module with the almond shim
//! 4. Stream back every output file whose digest changed
//!
//! Stages 1-3 run eagerly and abort the build on the first error. Stage 4
//! is the returned [`Reconciliation`], so nothing reaches storage unless
//! every optimizer run succeeded.

use std::fs;
use std::sync::Arc;

use tracing::{debug, info};

use super::materialize::materialize;
use super::optimizer::{Optimizer, OptimizerOptions};
use super::reconcile::Reconciliation;
use super::standalone::compile_standalone;
use super::workspace::CompileWorkspace;
use crate::config::RequireConfig;
use crate::domain::entities::SourcePaths;
use crate::domain::ports::{AssetStorage, PostProcessor};
use crate::domain::value_objects::{resolve_require_url, BuildProfile};
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::resources::Resources;
use crate::infrastructure::runtime::resolve_runtime;

/// Options for one post-processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostProcessOptions {
    /// Report nothing and touch nothing
    pub dry_run: bool,
    /// 0 silences the optimizer unless `logLevel` is configured
    pub verbosity: u8,
}

impl Default for PostProcessOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbosity: 1,
        }
    }
}

impl PostProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Optimizes assets into a storage
pub struct RequirePostProcessor {
    config: RequireConfig,
    storage: Arc<dyn AssetStorage>,
    resources: Resources,
    delegate: Option<Arc<dyn PostProcessor>>,
}

impl RequirePostProcessor {
    pub fn new(config: RequireConfig, storage: Arc<dyn AssetStorage>) -> Self {
        let resources = config.resources();
        Self {
            config,
            storage,
            resources,
            delegate: None,
        }
    }

    /// Use a resources directory other than the configured one
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Chain a post-processor that runs after reconciliation
    pub fn with_delegate(mut self, delegate: Arc<dyn PostProcessor>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn config(&self) -> &RequireConfig {
        &self.config
    }

    /// Build `paths` and return the stream of saved assets.
    ///
    /// A dry run returns an exhausted stream without creating a workspace.
    pub fn post_process(
        &self,
        paths: SourcePaths,
        options: &PostProcessOptions,
    ) -> RequireResult<Reconciliation> {
        if options.dry_run {
            debug!("dry run, skipping optimization");
            return Ok(Reconciliation::empty());
        }

        let workspace = CompileWorkspace::open(&self.config.base_url)?;
        let digests = materialize(&paths, &workspace)?;
        let mut exclude = self.config.exclude_names();

        if self.config.needs_optimizer() {
            self.check_optimizer_script()?;
            let runtime = resolve_runtime(&self.config.environment)?;
            let optimizer = Optimizer::new(runtime.as_ref(), &self.resources, options.verbosity);

            self.run_main_build(&optimizer, &workspace)?;

            if !self.config.standalone_modules.is_empty() {
                self.copy_loader_shim(&workspace)?;
                exclude.push(resolve_require_url(
                    &self.config.base_url,
                    Resources::LOADER_SHIM,
                ));
                for (module, spec) in &self.config.standalone_modules {
                    compile_standalone(&optimizer, &workspace, module, spec)?;
                }
            }
        } else {
            info!("build profile disabled and no standalone modules, skipping optimizer");
        }

        Ok(Reconciliation::new(
            workspace,
            digests,
            exclude,
            self.storage.clone(),
            paths,
            self.delegate.clone(),
        ))
    }

    fn check_optimizer_script(&self) -> RequireResult<()> {
        let script = self.resources.optimizer_script();
        if !script.is_file() {
            return Err(RequireError::ImproperlyConfigured(format!(
                "optimizer script not found at {}",
                script.display()
            )));
        }
        Ok(())
    }

    fn run_main_build(&self, optimizer: &Optimizer<'_>, workspace: &CompileWorkspace) -> RequireResult<()> {
        let profile = match &self.config.build_profile {
            BuildProfile::Disabled => return Ok(()),
            BuildProfile::Bundled => self.resources.path(Resources::APP_PROFILE),
            BuildProfile::Path(path) => workspace.compile_dir_path(path).ok_or_else(|| {
                RequireError::ImproperlyConfigured(format!(
                    "build_profile '{}' resolves outside the build workspace",
                    path
                ))
            })?,
        };

        let mut options = OptimizerOptions::new();
        options
            .set("dir", workspace.build_dir().display().to_string())
            .set("appDir", workspace.compile_dir().display().to_string())
            .set("baseUrl", self.config.base_url.as_str());

        optimizer.run(&profile, &options)
    }

    fn copy_loader_shim(&self, workspace: &CompileWorkspace) -> RequireResult<()> {
        let source = self.resources.path(Resources::LOADER_SHIM);
        if !source.is_file() {
            return Err(RequireError::ImproperlyConfigured(format!(
                "standalone modules need {} in the resources directory ({})",
                Resources::LOADER_SHIM,
                self.resources.dir().display()
            )));
        }
        let target = workspace
            .compile_dir_path(Resources::LOADER_SHIM)
            .ok_or_else(|| {
                RequireError::ImproperlyConfigured(format!(
                    "base_url '{}' resolves outside the build workspace",
                    self.config.base_url
                ))
            })?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, &target)?;
        Ok(())
    }
}
