//! Runtime detection
//!
//! Picks the JavaScript runtime the optimizer runs under. With the `auto`
//! setting each candidate is probed in order and the first one whose
//! executable can be spawned wins.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{CustomRuntime, NodeRuntime, RhinoRuntime};
use crate::domain::ports::RuntimeLauncher;
use crate::domain::value_objects::EnvironmentSetting;
use crate::error::{RequireError, RequireResult};

/// A runtime that may be present on this host
#[derive(Clone, Copy)]
pub struct RuntimeCandidate {
    pub name: &'static str,
    pub executable: &'static str,
    pub probe_args: &'static [&'static str],
    pub launcher: fn() -> Box<dyn RuntimeLauncher>,
}

impl std::fmt::Debug for RuntimeCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeCandidate")
            .field("name", &self.name)
            .field("executable", &self.executable)
            .finish()
    }
}

fn node_launcher() -> Box<dyn RuntimeLauncher> {
    Box::new(NodeRuntime)
}

fn rhino_launcher() -> Box<dyn RuntimeLauncher> {
    Box::new(RhinoRuntime)
}

/// Candidates tried by `auto`, in preference order
pub const DEFAULT_CANDIDATES: &[RuntimeCandidate] = &[
    RuntimeCandidate {
        name: "node",
        executable: NodeRuntime::EXECUTABLE,
        probe_args: NodeRuntime::PROBE_ARGS,
        launcher: node_launcher,
    },
    RuntimeCandidate {
        name: "rhino",
        executable: RhinoRuntime::EXECUTABLE,
        probe_args: RhinoRuntime::PROBE_ARGS,
        launcher: rhino_launcher,
    },
];

/// Check whether `executable` can be launched.
///
/// The exit status is irrelevant: a runtime that starts at all counts as
/// present. Only "not found" means absent; any other launch failure is
/// reported.
pub fn probe_executable(executable: &str, args: &[&str]) -> RequireResult<bool> {
    let result = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(RequireError::EnvironmentProbe {
            runtime: executable.to_string(),
            source,
        }),
    }
}

/// First available candidate, in order
pub fn detect_runtime(candidates: &[RuntimeCandidate]) -> RequireResult<Box<dyn RuntimeLauncher>> {
    for candidate in candidates {
        if probe_executable(candidate.executable, candidate.probe_args)? {
            debug!(runtime = candidate.name, "detected optimizer runtime");
            return Ok((candidate.launcher)());
        }
        debug!(runtime = candidate.name, "runtime not found");
    }

    let names: Vec<&str> = candidates.iter().map(|c| c.name).collect();
    Err(RequireError::EnvironmentResolution {
        candidates: names.join(", "),
    })
}

/// Turn the configured environment into a launcher
pub fn resolve_runtime(setting: &EnvironmentSetting) -> RequireResult<Box<dyn RuntimeLauncher>> {
    match setting {
        EnvironmentSetting::Auto => detect_runtime(DEFAULT_CANDIDATES),
        EnvironmentSetting::Node => Ok(Box::new(NodeRuntime)),
        EnvironmentSetting::Rhino => Ok(Box::new(RhinoRuntime)),
        EnvironmentSetting::Custom { command } => {
            Ok(Box::new(CustomRuntime::new(command.clone())?))
        }
    }
}
