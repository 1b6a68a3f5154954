//! Optimizer invoker
//!
//! Builds the r.js command line and runs it as a child process with the
//! parent's stdio, blocking until it exits.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::domain::ports::RuntimeLauncher;
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::resources::Resources;

/// r.js option controlling its own log output
pub const LOG_LEVEL_OPTION: &str = "logLevel";
/// r.js `logLevel` that only prints errors
pub const QUIET_LOG_LEVEL: &str = "4";

/// `key=value` options passed after the profile, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizerOptions {
    pairs: Vec<(String, String)>,
}

impl OptimizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing an earlier value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Set an option only if it is not present yet
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        if !self.contains(key) {
            self.pairs.push((key.to_string(), value.into()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn to_args(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(k, v)| format!("{}={}", k, v))
    }
}

/// Runs r.js under one runtime.
///
/// The runtime is resolved by the caller once per build and shared by the
/// main run and every standalone module.
pub struct Optimizer<'a> {
    launcher: &'a dyn RuntimeLauncher,
    resources: &'a Resources,
    verbosity: u8,
}

impl<'a> Optimizer<'a> {
    pub fn new(launcher: &'a dyn RuntimeLauncher, resources: &'a Resources, verbosity: u8) -> Self {
        Self {
            launcher,
            resources,
            verbosity,
        }
    }

    pub fn resources(&self) -> &Resources {
        self.resources
    }

    /// Full argv: runtime prefix, r.js, `-o`, profile, then the options
    pub fn command_line(&self, profile: &Path, options: &OptimizerOptions) -> Vec<String> {
        let mut options = options.clone();
        if self.verbosity == 0 {
            options.set_default(LOG_LEVEL_OPTION, QUIET_LOG_LEVEL);
        }

        let mut argv = self.launcher.command_prefix(self.resources);
        argv.push(self.resources.optimizer_script().display().to_string());
        argv.push("-o".to_string());
        argv.push(profile.display().to_string());
        argv.extend(options.to_args());
        argv
    }

    /// Run r.js and wait for it.
    ///
    /// A non-zero exit is an optimization failure; the exit code is kept on
    /// the error but never changes its message.
    pub fn run(&self, profile: &Path, options: &OptimizerOptions) -> RequireResult<()> {
        let argv = self.command_line(profile, options);
        let (program, args) = argv.split_first().ok_or_else(|| {
            RequireError::ImproperlyConfigured("optimizer command line is empty".to_string())
        })?;

        info!(runtime = self.launcher.name(), profile = %profile.display(), "running r.js optimizer");
        debug!(argv = ?argv, "optimizer command line");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| RequireError::OptimizerLaunch {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(RequireError::Optimization {
                code: status.code(),
            });
        }
        Ok(())
    }
}
