//! TypeScript import builder.

use barrelgen_codegen::{CodeBuilder, CodeFragment, Renderable};
use barrelgen_core::Style;

/// Builder for TypeScript import statements.
///
/// Barrels import every module by its default export; the header imports
/// the schema type by name.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    binding: Binding,
    style: Style,
}

#[derive(Debug, Clone)]
enum Binding {
    Default(String),
    Named(Vec<String>),
}

impl Import {
    pub fn new(from: impl Into<String>, style: Style) -> Self {
        Self {
            from: from.into(),
            binding: Binding::Named(Vec::new()),
            style,
        }
    }

    /// Import the default export, replacing any named imports.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.binding = Binding::Default(name.into());
        self
    }

    /// Import a named export, replacing a default import.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        match &mut self.binding {
            Binding::Named(names) => names.push(name.into()),
            Binding::Default(_) => self.binding = Binding::Named(vec![name.into()]),
        }
        self
    }

    fn statement(&self) -> String {
        let from = self.style.quote.quote(&self.from);

        let import_str = match &self.binding {
            Binding::Default(name) => format!("import {} from {}", name, from),
            Binding::Named(names) => {
                format!("import {{ {} }} from {}", names.join(", "), from)
            }
        };

        self.style.terminate(&import_str)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
