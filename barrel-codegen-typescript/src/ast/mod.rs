//! TypeScript AST builders for the statements a barrel contains.
//!
//! Every builder takes a [`Style`](barrelgen_core::Style) so quotes and
//! statement terminators are applied uniformly.

mod consts;
mod exports;
mod imports;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::{JsObject, Property, PropertyValue};
