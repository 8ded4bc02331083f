//! Import collection.
//!
//! Pairs every module with the specifier used to import it, and derives the
//! alias, directory segments and export key the rest of the barrel needs.

use std::path::{Component, Path, PathBuf};

use barrelgen_codegen::ImportPathResolver;
use barrelgen_core::{
    Directory, Location, relative_path, strip_non_alphanumeric, strip_suffix, to_posix,
};

/// Segment naming the barrel directory itself.
pub const ROOT_SEGMENT: &str = ".";

/// A module and the specifier a barrel imports it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub module: Location,
    pub path: String,
}

impl ImportRecord {
    /// Module path relative to the barrel directory.
    pub fn relative_path(&self, directory: &Directory) -> PathBuf {
        relative_path(directory.path(), &self.module.path)
    }

    /// Local binding name: the relative path with every non-alphanumeric
    /// character removed.
    pub fn alias(&self, directory: &Directory) -> String {
        strip_non_alphanumeric(&to_posix(&self.relative_path(directory)))
    }

    /// Directory segments between the barrel and the module.
    pub fn segments(&self, directory: &Directory) -> Vec<String> {
        segments(&self.relative_path(directory))
    }

    /// Key of the module inside its directory node: the file name without `.ts`.
    pub fn leaf_name(&self) -> &str {
        strip_suffix(&self.module.name, ".ts")
    }
}

/// Directory segments of a relative module path; `["."]` for a module that
/// sits directly in the barrel directory.
pub fn segments(relative: &Path) -> Vec<String> {
    let parts: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if parts.is_empty() {
        vec![ROOT_SEGMENT.to_string()]
    } else {
        parts
    }
}

/// Resolve every module and sort the records by import path.
///
/// The sort is byte-wise and stable.
pub fn collect_imports<R>(
    directory: &Directory,
    modules: &[Location],
    resolver: &R,
) -> Vec<ImportRecord>
where
    R: ImportPathResolver + ?Sized,
{
    let mut records: Vec<ImportRecord> = modules
        .iter()
        .map(|module| ImportRecord {
            module: module.clone(),
            path: resolver.resolve(directory, module),
        })
        .collect();
    records.sort_by(|a, b| a.path.cmp(&b.path));
    records
}
