//! TypeScript export builder.

use barrelgen_codegen::{CodeBuilder, CodeFragment, Renderable};
use barrelgen_core::Style;

/// Builder for local re-export statements (`export {a as A};`).
#[derive(Debug, Clone)]
pub struct Export {
    named: Vec<(String, String)>,
    style: Style,
}

impl Export {
    pub fn new(style: Style) -> Self {
        Self {
            named: Vec::new(),
            style,
        }
    }

    /// Export a local binding under another name.
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.named.push((name.into(), alias.into()));
        self
    }

    fn statement(&self) -> Option<String> {
        if self.named.is_empty() {
            return None;
        }

        let specifiers: Vec<String> = self
            .named
            .iter()
            .map(|(name, alias)| format!("{} as {}", name, alias))
            .collect();

        Some(
            self.style
                .terminate(&format!("export {{{}}}", specifiers.join(", "))),
        )
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.statement().map(CodeFragment::line).into_iter().collect()
    }
}
