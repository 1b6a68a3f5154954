//! Presentation Layer
//!
//! CLI argument parsing (via clap). Command handlers live in the binary.

pub mod cli;

pub use cli::{Cli, Commands};
