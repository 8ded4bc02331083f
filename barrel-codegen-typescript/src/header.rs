//! The generated-file header.

use barrelgen_codegen::CodeBuilder;
use barrelgen_config::SchemaConfig;
use barrelgen_core::Style;

use crate::ast::Import;

/// Prepend the generated-file notice and the schema type import to `body`.
pub fn add_header(body: &str, style: Style, schema: &SchemaConfig) -> String {
    let mut builder = CodeBuilder::typescript();
    builder
        .push_line("/**")
        .push_line(" * @file Automatically generated by barrelgen.")
        .push_line(" * Run `barrel generate` from the project root to regenerate")
        .push_line(" */")
        .push_blank()
        .emit(&Import::new(&schema.type_import, style).named(&schema.type_name))
        .push_blank();

    let mut content = builder.build();
    content.push_str(body);
    content
}
