//! Custom runtime
//!
//! Uses an argv prefix taken verbatim from configuration, e.g.
//! `environment = { command = ["bun"] }`.

use crate::domain::ports::RuntimeLauncher;
use crate::error::{RequireError, RequireResult};
use crate::infrastructure::resources::Resources;

pub struct CustomRuntime {
    command: Vec<String>,
}

impl CustomRuntime {
    pub fn new(command: Vec<String>) -> RequireResult<Self> {
        if command.first().map_or(true, |c| c.trim().is_empty()) {
            return Err(RequireError::ImproperlyConfigured(
                "custom environment command must not be empty".to_string(),
            ));
        }
        Ok(Self { command })
    }
}

impl RuntimeLauncher for CustomRuntime {
    fn name(&self) -> &str {
        &self.command[0]
    }

    fn command_prefix(&self, _resources: &Resources) -> Vec<String> {
        self.command.clone()
    }
}
