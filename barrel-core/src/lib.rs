//! Core utilities and types for the barrelgen barrel generator.
//!
//! This crate provides the fundamental types shared across the barrelgen
//! crates: discovered module locations, output style, and file writing.

mod file;
mod location;
mod style;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Discovered modules
pub use location::{Directory, Location};
// Output style
pub use style::{QuoteCharacter, Style, Terminator};
// String and path utilities
pub use utils::{
    export_name, is_identifier, relative_path, strip_non_alphanumeric, strip_suffix, to_posix,
};
