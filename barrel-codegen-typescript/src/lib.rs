//! TypeScript barrel generator for barrelgen.
//!
//! A barrel re-exports every module under a directory tree. Modules are
//! imported under an alias derived from their path, then exported as nested
//! objects mirroring the directory layout.
//!
//! # Usage
//!
//! This crate is used internally by the `barrel` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use barrelgen_codegen::BarrelCodegen;
//! use barrelgen_codegen_typescript::Generator;
//! use barrelgen_config::BarrelToml;
//!
//! let config = BarrelToml::open("barrel.toml")?.into_manifest().barrel;
//! let generator = Generator::new(&config)?;
//!
//! // Preview barrels without writing
//! let files = generator.preview();
//!
//! // Write barrels to disk
//! let result = generator.generate()?;
//! ```
//!
//! # Generated Output
//!
//! For `a/One.ts` and `Two.ts` with single quotes:
//!
//! ```text
//! import Twots from './Two';
//! import aOnets from './a/One';
//! export {Twots as Two};
//! export const a = {
//!   'One': aOnets as JSONSchema,
//! };
//! ```
//!
//! Property lines are written as `'key': alias as JSONSchema,` with nothing
//! after the opening `{`. Barrels from generators that emit `{ ` and
//! `'key':alias` differ byte-wise, so `barrel check` reports them stale until
//! they are regenerated once.

mod barrel;
mod generator;
mod header;
mod imports;
mod serializer;
mod structure;

pub mod ast;

pub use barrel::{BarrelBody, build_filesystem_barrel};
pub use barrelgen_codegen::language::{BarrelCodegen, CheckResult, GenerateResult, PreviewFile};
pub use generator::Generator;
pub use header::add_header;
pub use imports::{ImportRecord, ROOT_SEGMENT, collect_imports, segments};
pub use serializer::{ExportSerializer, render_exports};
pub use structure::{ExportStructure, StructureNode};
