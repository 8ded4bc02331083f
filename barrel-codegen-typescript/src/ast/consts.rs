//! TypeScript const declaration builder.

use barrelgen_codegen::{CodeBuilder, CodeFragment, Renderable};
use barrelgen_core::Style;

use super::JsObject;

/// Builder for an exported const initialised with an object literal.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: JsObject,
    style: Style,
}

impl Const {
    pub fn object(name: impl Into<String>, value: JsObject, style: Style) -> Self {
        Self {
            name: name.into(),
            value,
            style,
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let head = format!("export const {} = ", self.name);

        if self.value.is_empty() {
            return vec![CodeFragment::line(
                self.style.terminate(&format!("{}{{}}", head)),
            )];
        }

        vec![CodeFragment::block(
            format!("{}{{", head),
            self.value.properties_to_fragments(),
            Some(self.style.terminate("}")),
        )]
    }
}
