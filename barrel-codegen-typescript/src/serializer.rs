//! Rendering an [`ExportStructure`] into export statements.

use std::collections::BTreeMap;

use barrelgen_codegen::{CodeBuilder, CodeFragment, Renderable};
use barrelgen_core::{Style, export_name};

use crate::{
    ast::{Const, Export, JsObject},
    structure::{ExportStructure, StructureNode},
};

/// Renders each top-level key of a structure as one export statement.
///
/// A leaf becomes `export {alias as Name};` and a branch becomes an exported
/// const holding a nested object literal whose leaves are cast to the schema
/// type.
#[derive(Debug, Clone, Copy)]
pub struct ExportSerializer<'a> {
    structure: &'a ExportStructure,
    style: Style,
    schema_type: &'a str,
}

impl<'a> ExportSerializer<'a> {
    pub fn new(structure: &'a ExportStructure, style: Style, schema_type: &'a str) -> Self {
        Self {
            structure,
            style,
            schema_type,
        }
    }

    fn object(&self, children: &BTreeMap<String, StructureNode>) -> JsObject {
        children
            .iter()
            .fold(JsObject::new(self.style.quote), |object, (key, node)| {
                let name = export_name(key);
                match node {
                    StructureNode::Leaf(alias) => {
                        object.raw(name, format!("{} as {}", alias, self.schema_type))
                    }
                    StructureNode::Branch(nested) => object.object(name, self.object(nested)),
                }
            })
    }
}

impl Renderable for ExportSerializer<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.structure
            .root()
            .iter()
            .flat_map(|(key, node)| {
                let name = export_name(key);
                match node {
                    StructureNode::Leaf(alias) => Export::new(self.style)
                        .named_as(alias.as_str(), name)
                        .to_fragments(),
                    StructureNode::Branch(children) => {
                        Const::object(name, self.object(children), self.style).to_fragments()
                    }
                }
            })
            .collect()
    }
}

/// Render the export statements of `structure`, one per top-level key.
pub fn render_exports(structure: &ExportStructure, style: Style, schema_type: &str) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(&ExportSerializer::new(structure, style, schema_type));
    builder.build()
}
