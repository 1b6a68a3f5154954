//! requirekit CLI - optimize require.js assets with r.js
//!
//! Usage: requirekit <COMMAND>
//!
//! Commands:
//!   collect  Collect static files, then optimize them with r.js
//!   init     Copy require.js and the default build profiles
//!   tag      Print the script tag(s) that load a module

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use requirekit::presentation::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = run(&cli);
    if let Err(e) = &result {
        if cli.json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "message": format!("{:#}", e),
            }));
        }
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref(), cli.json)?;

    match &cli.command {
        Commands::Collect {
            dry_run,
            no_post_process,
        } => commands::collect::cmd_collect(
            &config,
            *dry_run,
            *no_post_process,
            cli.optimizer_verbosity(),
            cli.json,
        ),
        Commands::Init { force, dir } => {
            commands::init::cmd_init(&config, *force, dir.clone(), cli.quiet, cli.json)
        }
        Commands::Tag {
            module,
            debug,
            no_debug,
        } => {
            let debug = match (*debug, *no_debug) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::tag::cmd_tag(&config, module, debug, cli.json)
        }
    }
}

/// Log to stderr. `REQUIREKIT_LOG` takes an EnvFilter expression and wins
/// over the -v/-q flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let filter = std::env::var("REQUIREKIT_LOG")
        .ok()
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
