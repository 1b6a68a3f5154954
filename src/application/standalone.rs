//! Standalone module compiler
//!
//! Each standalone module gets its own optimizer run that bundles the
//! almond loader shim together with the module's dependency graph.

use std::path::PathBuf;

use tracing::info;

use super::optimizer::{Optimizer, OptimizerOptions};
use super::workspace::CompileWorkspace;
use crate::domain::entities::StandaloneModuleSpec;
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::resources::Resources;

/// Options for one standalone module run, and the profile to use.
///
/// Fails before anything is spawned when the module has no `out`, or when
/// `out`, the build profile or the base URL resolve outside the workspace.
pub fn standalone_options(
    workspace: &CompileWorkspace,
    resources: &Resources,
    module: &str,
    spec: &StandaloneModuleSpec,
) -> RequireResult<(PathBuf, OptimizerOptions)> {
    let out = spec
        .output_path()
        .ok_or_else(|| RequireError::MissingStandaloneOut {
            module: module.to_string(),
        })?;
    let out = inside(module, "out", &out, workspace.build_dir_path(&out))?;

    let profile = match spec.build_profile_path() {
        Some(path) => inside(module, "build_profile", &path, workspace.compile_dir_path(&path))?,
        None => resources.path(Resources::MODULE_PROFILE),
    };

    let base_url = spec.relative_baseurl();
    let base_url = inside(
        module,
        "relative_baseurl",
        base_url,
        workspace.compile_dir_path(base_url),
    )?;

    let mut options = OptimizerOptions::new();
    options
        .set("name", Resources::LOADER_SHIM_MODULE)
        .set("include", spec.entry_point(module))
        .set("out", out.display().to_string())
        .set("baseUrl", base_url.display().to_string());

    Ok((profile, options))
}

fn inside(module: &str, option: &str, value: &str, resolved: Option<PathBuf>) -> RequireResult<PathBuf> {
    resolved.ok_or_else(|| {
        RequireError::ImproperlyConfigured(format!(
            "'{}' option '{}' for module '{}' resolves outside the build workspace",
            option, value, module
        ))
    })
}

/// Compile one standalone module
pub fn compile_standalone(
    optimizer: &Optimizer<'_>,
    workspace: &CompileWorkspace,
    module: &str,
    spec: &StandaloneModuleSpec,
) -> RequireResult<()> {
    let (profile, options) = standalone_options(workspace, optimizer.resources(), module, spec)?;
    info!(module, "compiling standalone module");
    optimizer.run(&profile, &options)
}
