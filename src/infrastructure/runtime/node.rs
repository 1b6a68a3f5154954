//! Node.js runtime
//!
//! Runs the optimizer with the `node` binary found on PATH.

use crate::domain::ports::RuntimeLauncher;
use crate::infrastructure::resources::Resources;

pub struct NodeRuntime;

impl NodeRuntime {
    pub const EXECUTABLE: &'static str = "node";
    pub const PROBE_ARGS: &'static [&'static str] = &["-v"];
}

impl RuntimeLauncher for NodeRuntime {
    fn name(&self) -> &str {
        "node"
    }

    fn command_prefix(&self, _resources: &Resources) -> Vec<String> {
        vec![Self::EXECUTABLE.to_string()]
    }
}
