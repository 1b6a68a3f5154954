//! Tag command - print the script tag(s) for a module

use anyhow::Result;
use requirekit::{Config, FileSystemStorage, ModuleReference};

use crate::ui::json;

pub fn cmd_tag(config: &Config, module: &str, debug: Option<bool>, json_output: bool) -> Result<()> {
    let storage = FileSystemStorage::new(&config.staticfiles.root, &config.staticfiles.url);
    let mut reference = ModuleReference::new(&config.require, &storage);
    if let Some(debug) = debug {
        reference = reference.with_debug(debug);
    }
    let html = reference.render(module);

    if json_output {
        let _ = json::emit(serde_json::json!({
            "event": "tag",
            "module": module,
            "html": html,
        }));
    } else {
        println!("{}", html);
    }
    Ok(())
}
