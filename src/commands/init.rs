//! Init command - copy require.js and default build profiles

use std::path::PathBuf;

use anyhow::Result;
use requirekit::application::{InitOptions, InitUseCase};
use requirekit::Config;

use crate::ui::json;

pub fn cmd_init(
    config: &Config,
    force: bool,
    dir: Option<PathBuf>,
    quiet: bool,
    json_output: bool,
) -> Result<()> {
    let entries = InitUseCase::new(config).execute(&InitOptions { force, dir })?;

    for entry in &entries {
        if json_output {
            let _ = json::emit(serde_json::json!({
                "event": "resource",
                "resource": entry.resource,
                "destination": entry.destination.display().to_string(),
                "action": entry.action,
            }));
        } else if !quiet {
            println!("{}", entry);
        }
    }

    if json_output {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "resources": entries.len(),
        }));
    }

    Ok(())
}
