//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --quiet, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// requirekit - optimize require.js assets with r.js
#[derive(Parser, Debug)]
#[command(name = "requirekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors; also silences the optimizer
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (default: ./requirekit.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity handed to the optimizer: 0 when quiet, otherwise 1 + -v count
    pub fn optimizer_verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect static files, then optimize them with r.js
    Collect {
        /// Show what would be collected without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Copy files only; skip the optimizer and the manifest
        #[arg(long)]
        no_post_process: bool,
    },

    /// Copy require.js and the default build profiles into the project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Destination directory (default: first [staticfiles] dirs entry)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the script tag(s) that load a module
    Tag {
        /// Module name, relative to the base URL
        module: String,

        /// Render as in debug mode
        #[arg(long, conflicts_with = "no_debug")]
        debug: bool,

        /// Render as in production mode
        #[arg(long)]
        no_debug: bool,
    },
}
