//! Domain Layer
//!
//! ## Structure
//!
//! - `entities/` - Standalone module specs, source entries, processing reports
//! - `value_objects/` - Content hashes, module URLs, settings enums
//! - `ports/` - Interface definitions for infrastructure
//!
//! Everything here is free of process spawning; file access happens only
//! through the storage port.

pub mod entities;
pub mod ports;
pub mod value_objects;
