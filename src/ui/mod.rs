//! Terminal output helpers for the CLI

pub mod json;
