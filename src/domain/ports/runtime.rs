//! RuntimeLauncher port - how the optimizer script gets executed
//!
//! A launcher supplies the leading argv tokens; the optimizer invoker
//! appends the optimizer script and its own arguments.

use crate::infrastructure::resources::Resources;

/// A JavaScript runtime able to run the optimizer script
pub trait RuntimeLauncher: Send + Sync {
    /// Get the name of this runtime (for logging and error messages)
    fn name(&self) -> &str;

    /// Argv tokens placed before the optimizer script path
    fn command_prefix(&self, resources: &Resources) -> Vec<String>;
}
