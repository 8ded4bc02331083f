//! Shared code generation utilities for the barrelgen barrel generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific barrel generators (e.g., `barrelgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`diagnostic`] - Warnings collected while building a barrel
//! - [`discovery`] - Walking a directory tree for modules
//! - [`destinations`] - Choosing which directories receive a barrel
//! - [`language`] - The `BarrelCodegen` trait and its result types
//! - [`resolve`] - Import path resolution

pub mod builder;
pub mod destinations;
pub mod diagnostic;
pub mod discovery;
pub mod language;
pub mod resolve;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use diagnostic::Diagnostic;
pub use language::{BarrelCodegen, CheckResult, GenerateResult, PreviewFile};
pub use resolve::{ImportPathResolver, TypeScriptResolver};
