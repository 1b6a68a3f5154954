//! Test environment builder for isolated requirekit testing.
//!
//! Provides `TestEnv` - a temporary project with an `assets/` source
//! directory, a `static/` destination, a `resources/` directory holding the
//! stand-in optimizer, and a `requirekit.toml` wiring them together.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{read_invocations, write_fake_resources, write_file};

/// Environment variables that would leak host settings into a run
const HOST_OVERRIDES: &[&str] = &[
    "REQUIREKIT_LOG",
    "REQUIREKIT_DEBUG",
    "REQUIREKIT_ENVIRONMENT",
    "REQUIREKIT_BASE_URL",
    "REQUIREKIT_RESOURCES_DIR",
];

/// Result of running a requirekit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with('{'))
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {l}: {e}")))
            .collect()
    }
}

/// Isolated project directory.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.project_path("resources")
    }

    /// Destination storage root
    pub fn static_path(&self, relative: &str) -> PathBuf {
        self.project_path("static").join(relative)
    }

    pub fn read_static(&self, relative: &str) -> String {
        fs::read_to_string(self.static_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read static file {}: {}", relative, e))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(self.project_root.path(), relative, content);
    }

    pub fn invocations(&self) -> Vec<String> {
        read_invocations(&self.resources_dir())
    }

    /// Run requirekit from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run requirekit from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for key in HOST_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute requirekit");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    assets: Vec<(String, String)>,
    config: Option<String>,
    write_config: bool,
    fake_resources: bool,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            config: None,
            write_config: true,
            fake_resources: true,
        }
    }

    /// Add a file to the `assets/` source directory
    pub fn with_asset(mut self, name: &str, content: &str) -> Self {
        self.assets.push((name.to_string(), content.to_string()));
        self
    }

    /// Extra TOML appended after the generated `[require]` and
    /// `[staticfiles]` tables' keys
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Do not write `requirekit.toml`
    pub fn without_config_file(mut self) -> Self {
        self.write_config = false;
        self
    }

    /// Do not install the stand-in optimizer
    pub fn without_fake_resources(mut self) -> Self {
        self.fake_resources = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let root = project_root.path();

        fs::create_dir_all(root.join("assets")).unwrap();
        for (name, content) in &self.assets {
            write_file(&root.join("assets"), name, content);
        }
        if self.fake_resources {
            write_fake_resources(&root.join("resources"));
        }
        if self.write_config {
            let config = self.config.as_deref().unwrap_or(
                "[require]\nenvironment = { command = [\"sh\"] }\nresources_dir = \"resources\"\n\n[staticfiles]\ndirs = [\"assets\"]\n",
            );
            fs::write(root.join("requirekit.toml"), config).unwrap();
        }

        TestEnv {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_requirekit")),
        }
    }
}

/// Standard `requirekit.toml` using the stand-in optimizer, with extra
/// `[require]` keys and tables appended
pub fn config_with(require_keys: &str, tables: &str) -> String {
    format!(
        "[require]\nenvironment = {{ command = [\"sh\"] }}\nresources_dir = \"resources\"\n{}\n\n[staticfiles]\ndirs = [\"assets\"]\n\n{}\n",
        require_keys, tables
    )
}
