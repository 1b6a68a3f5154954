//! Command handlers for the requirekit binary

pub mod collect;
pub mod init;
mod project_root;
pub mod tag;

use std::path::Path;

use anyhow::{bail, Context, Result};
use requirekit::config::{Config, CONFIG_FILE_NAME};

use crate::ui::json;

/// Load configuration for a command.
///
/// An explicit `--config` must exist. Otherwise `requirekit.toml` is looked
/// up from the current directory upward; without one, defaults apply
/// relative to the current directory.
pub fn load_config(explicit: Option<&Path>, json_output: bool) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("configuration file {} not found", path.display());
            }
            Some(path.to_path_buf())
        }
        None => {
            let candidate = project_root::discover_project_root(&cwd).join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    let config = match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)?;
            for warning in warnings {
                if json_output {
                    let _ = json::emit(serde_json::json!({
                        "event": "warning",
                        "kind": "unknown_config_key",
                        "key": warning.key,
                        "file": warning.file.display().to_string(),
                        "line": warning.line,
                        "suggestion": warning.suggestion,
                    }));
                } else {
                    eprintln!("Warning: {}", warning);
                }
            }
            config
        }
        None => Config::default().resolve_paths(&cwd),
    };

    Ok(config.with_env_overrides())
}
