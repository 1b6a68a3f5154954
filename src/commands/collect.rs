//! Collect command - gather static files and optimize them

use std::sync::Arc;

use anyhow::{Context, Result};
use requirekit::application::{
    CollectUseCase, ManifestPostProcessor, PostProcessOptions, RequirePostProcessor,
};
use requirekit::{AssetStorage, Config, FileSystemStorage};

use crate::ui::json;

pub fn cmd_collect(
    config: &Config,
    dry_run: bool,
    no_post_process: bool,
    verbosity: u8,
    json_output: bool,
) -> Result<()> {
    let staticfiles = &config.staticfiles;
    let destination: Arc<dyn AssetStorage> =
        Arc::new(FileSystemStorage::new(&staticfiles.root, &staticfiles.url));
    let ignore = staticfiles
        .ignore_patterns()
        .context("invalid [staticfiles] ignore pattern")?;

    let (paths, report) = CollectUseCase::new(destination.clone(), ignore)
        .with_source_dirs(&staticfiles.dirs)?
        .execute(dry_run)?;

    if json_output {
        let _ = json::emit(serde_json::json!({
            "event": "collected",
            "dry_run": dry_run,
            "copied": report.copied,
            "unmodified": report.unmodified,
            "ignored": report.ignored,
        }));
    } else if verbosity > 1 {
        let verb = if dry_run { "Pretending to copy" } else { "Copying" };
        for name in &report.copied {
            println!("{} '{}'", verb, name);
        }
    }

    let mut post_processed = 0usize;
    if !no_post_process {
        let mut processor = RequirePostProcessor::new(config.require.clone(), destination.clone());
        if staticfiles.manifest {
            processor =
                processor.with_delegate(Arc::new(ManifestPostProcessor::new(destination.clone())));
        }

        let options = PostProcessOptions::new()
            .with_dry_run(dry_run)
            .with_verbosity(verbosity);
        for asset in processor.post_process(paths, &options)? {
            let asset = asset?;
            post_processed += 1;
            if json_output {
                let _ = json::emit(serde_json::json!({
                    "event": "post_processed",
                    "original": asset.original_name,
                    "processed": asset.processed_name,
                }));
            } else if verbosity > 0 {
                println!(
                    "Post-processed '{}' as '{}'",
                    asset.original_name, asset.processed_name
                );
            }
        }
    }

    if json_output {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "collect",
            "copied": report.copied.len(),
            "unmodified": report.unmodified.len(),
            "post_processed": post_processed,
        }));
    } else if verbosity > 0 {
        println!(
            "{} static file{} {}, {} unmodified, {} post-processed.",
            report.copied.len(),
            if report.copied.len() == 1 { "" } else { "s" },
            if dry_run { "would be copied" } else { "copied" },
            report.unmodified.len(),
            post_processed
        );
    }

    Ok(())
}
