//! Rhino runtime
//!
//! Runs the optimizer inside the Rhino shell on the JVM, with the Closure
//! Compiler on the classpath so profiles may use `optimize: "closure"`.

use crate::domain::ports::RuntimeLauncher;
use crate::infrastructure::resources::Resources;

#[cfg(windows)]
const CLASSPATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const CLASSPATH_SEPARATOR: &str = ":";

pub struct RhinoRuntime;

impl RhinoRuntime {
    pub const EXECUTABLE: &'static str = "java";
    pub const PROBE_ARGS: &'static [&'static str] = &["-version"];
    const MAIN_CLASS: &'static str = "org.mozilla.javascript.tools.shell.Main";
    /// r.js recurses deeply on large module graphs
    const STACK_SIZE: &'static str = "-Xss100M";
}

impl RuntimeLauncher for RhinoRuntime {
    fn name(&self) -> &str {
        "rhino"
    }

    fn command_prefix(&self, resources: &Resources) -> Vec<String> {
        let classpath = [Resources::RHINO_JAR, Resources::CLOSURE_JAR]
            .iter()
            .map(|jar| resources.path(jar).display().to_string())
            .collect::<Vec<_>>()
            .join(CLASSPATH_SEPARATOR);

        vec![
            Self::EXECUTABLE.to_string(),
            Self::STACK_SIZE.to_string(),
            "-classpath".to_string(),
            classpath,
            Self::MAIN_CLASS.to_string(),
            // interpreted mode; compiled mode overflows on r.js
            "-opt".to_string(),
            "-1".to_string(),
        ]
    }
}
