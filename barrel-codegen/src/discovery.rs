//! Module discovery.
//!
//! Walks a root directory and builds a [`Directory`] tree of TypeScript
//! modules, skipping existing barrels and applying include/exclude filters.

use std::path::{Component, Path};

use barrelgen_core::{Directory, Location};
use eyre::{Result, bail};
use ignore::WalkBuilder;
use regex::Regex;
use tracing::{debug, trace};

/// Decides which files are modules.
#[derive(Debug, Clone)]
pub struct ModuleFilter {
    /// File name of barrels; such files are never modules.
    barrel_name: String,
    /// When non-empty, a module path must match at least one pattern.
    include: Vec<Regex>,
    /// A module path matching any pattern is skipped.
    exclude: Vec<Regex>,
}

impl ModuleFilter {
    pub fn new(barrel_name: impl Into<String>) -> Self {
        Self {
            barrel_name: barrel_name.into(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    pub fn with_include(mut self, patterns: Vec<Regex>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<Regex>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Whether `path` is a barrel file.
    pub fn is_barrel(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy() == self.barrel_name)
    }

    /// Whether `path` is a TypeScript source file that passes the filters.
    pub fn is_module(&self, path: &Path) -> bool {
        if self.is_barrel(path) || !is_typescript(path) {
            return false;
        }

        let text = path.to_string_lossy();
        if !self.include.is_empty() && !self.include.iter().any(|re| re.is_match(&text)) {
            trace!(path = %text, "not included");
            return false;
        }
        if self.exclude.iter().any(|re| re.is_match(&text)) {
            trace!(path = %text, "excluded");
            return false;
        }
        true
    }
}

fn is_typescript(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "ts" || ext == "tsx")
}

/// Walk `root` and return its directory tree.
///
/// Files and directories are sorted by name at every level.
pub fn discover(root: &Path, filter: &ModuleFilter) -> Result<Directory> {
    if !root.is_dir() {
        bail!("directory not found: {}", root.display());
    }

    let mut tree = Directory::new(root);
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.depth() == 0 {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);

        if path.is_dir() {
            ensure_directory(&mut tree, relative);
            continue;
        }

        let parent = relative.parent().unwrap_or(Path::new(""));
        let directory = ensure_directory(&mut tree, parent);
        if filter.is_barrel(path) {
            debug!(path = %path.display(), "found existing barrel");
            directory.barrel = Some(Location::new(path));
        } else if filter.is_module(path) {
            directory.files.push(Location::new(path));
        }
    }

    sort_tree(&mut tree);
    debug!(
        root = %root.display(),
        modules = tree.modules().len(),
        "discovered modules"
    );
    Ok(tree)
}

fn ensure_directory<'a>(root: &'a mut Directory, relative: &Path) -> &'a mut Directory {
    let mut current = root;
    for component in relative.components() {
        let Component::Normal(name) = component else {
            continue;
        };
        let name = name.to_string_lossy();
        let index = match current.directories.iter().position(|d| d.name == name) {
            Some(index) => index,
            None => {
                let path = current.path.join(&*name);
                current.directories.push(Directory::new(path));
                current.directories.len() - 1
            }
        };
        current = &mut current.directories[index];
    }
    current
}

fn sort_tree(directory: &mut Directory) {
    directory.files.sort_by(|a, b| a.name.cmp(&b.name));
    directory.directories.sort_by(|a, b| a.name.cmp(&b.name));
    for child in &mut directory.directories {
        sort_tree(child);
    }
}
