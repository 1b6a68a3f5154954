//! Optimizer runtimes
//!
//! Implementations of the RuntimeLauncher port, plus detection for the
//! `auto` environment setting.

mod custom;
mod detect;
mod node;
mod rhino;

pub use custom::CustomRuntime;
pub use detect::{
    detect_runtime, probe_executable, resolve_runtime, RuntimeCandidate, DEFAULT_CANDIDATES,
};
pub use node::NodeRuntime;
pub use rhino::RhinoRuntime;
