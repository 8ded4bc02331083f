//! Building the body of one filesystem barrel.

use std::collections::HashMap;

use barrelgen_codegen::{CodeBuilder, Diagnostic, ImportPathResolver};
use barrelgen_core::{Directory, Location, Style, is_identifier};
use tracing::trace;

use crate::{
    ast::Import,
    imports::collect_imports,
    serializer::ExportSerializer,
    structure::ExportStructure,
};

/// Barrel text without the header, plus the collisions met while building it.
#[derive(Debug, Clone, Default)]
pub struct BarrelBody {
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the import lines and nested exports of a barrel in `directory`.
///
/// Import lines come first, sorted by import path, then one export statement
/// per top-level key of the structure.
pub fn build_filesystem_barrel<R>(
    directory: &Directory,
    modules: &[Location],
    style: Style,
    resolver: &R,
    schema_type: &str,
) -> BarrelBody
where
    R: ImportPathResolver + ?Sized,
{
    let mut builder = CodeBuilder::typescript();
    let mut structure = ExportStructure::new();
    let mut diagnostics = Vec::new();
    let mut aliases: HashMap<String, String> = HashMap::new();

    for record in collect_imports(directory, modules, resolver) {
        let alias = record.alias(directory);
        trace!(path = %record.path, alias = %alias, "import");

        if !is_identifier(&alias) {
            diagnostics.push(
                Diagnostic::warning(
                    "imports",
                    format!("alias '{}' for '{}' is not a valid identifier", alias, record.path),
                )
                .at(record.module.path.display().to_string()),
            );
        }

        if let Some(previous) = aliases.insert(alias.clone(), record.path.clone()) {
            diagnostics.push(
                Diagnostic::warning(
                    "imports",
                    format!(
                        "'{}' and '{}' share the alias {}; the later binding wins",
                        previous, record.path, alias
                    ),
                )
                .at(record.module.path.display().to_string()),
            );
        }

        builder.emit(&Import::new(record.path.as_str(), style).default(alias.as_str()));
        structure.insert(&record.segments(directory), record.leaf_name(), alias);
    }

    builder.emit(&ExportSerializer::new(&structure, style, schema_type));
    diagnostics.extend(structure.diagnostics());

    BarrelBody {
        content: builder.build(),
        diagnostics,
    }
}
