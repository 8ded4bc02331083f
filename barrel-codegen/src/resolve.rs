//! Import path resolution.
//!
//! Turns a module location into the module specifier a barrel uses to
//! import it.

use std::path::{Path, PathBuf};

use barrelgen_core::{Directory, Location, relative_path, strip_suffix, to_posix};

/// Extensions removed from module file names, longest first.
const TYPESCRIPT_EXTENSIONS: [&str; 3] = [".d.ts", ".tsx", ".ts"];

/// Computes the module specifier for a module imported from a barrel.
pub trait ImportPathResolver {
    /// Resolve `module` as seen from a barrel in `directory`.
    fn resolve(&self, directory: &Directory, module: &Location) -> String;
}

/// Resolves TypeScript module specifiers, optionally against a base URL.
///
/// Without a base URL the specifier is relative to the barrel directory and
/// starts with `./`. With one it is relative to the base URL and has no
/// leading `./`.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptResolver {
    base_url: Option<PathBuf>,
}

impl TypeScriptResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against `base_url` instead of the barrel directory.
    pub fn with_base_url(base_url: impl Into<PathBuf>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&Path> {
        self.base_url.as_deref()
    }
}

/// Strip a TypeScript extension from a file name.
pub fn strip_typescript_extension(name: &str) -> &str {
    TYPESCRIPT_EXTENSIONS
        .iter()
        .find(|ext| name.ends_with(**ext))
        .map_or(name, |ext| strip_suffix(name, ext))
}

impl ImportPathResolver for TypeScriptResolver {
    fn resolve(&self, directory: &Directory, module: &Location) -> String {
        let start = self.base_url().unwrap_or(directory.path());
        let relative = relative_path(start, &module.path);
        let file = strip_typescript_extension(&module.name);

        let parent = relative.parent().map_or_else(|| ".".to_string(), to_posix);
        let specifier = if parent == "." {
            format!("./{}", file)
        } else if parent.starts_with("..") {
            format!("{}/{}", parent, file)
        } else {
            format!("./{}/{}", parent, file)
        };

        match self.base_url {
            Some(_) => specifier
                .strip_prefix("./")
                .map(str::to_string)
                .unwrap_or(specifier),
            None => specifier,
        }
    }
}
