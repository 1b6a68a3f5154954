//! Common test utilities for requirekit integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project with a stand-in optimizer, plus helpers to
//!   run the requirekit CLI
//! - Fixtures: the stand-in `r.js` script and build profiles

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
