//! `barrel.toml` parsing and validation.
//!
//! The configuration file is optional: every setting has a default, and the
//! CLI can override any of them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod mode;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::{BarrelToml, CONFIG_FILENAME};
pub use manifest::{BarrelConfig, Manifest, SchemaConfig};
pub use mode::LocationMode;
