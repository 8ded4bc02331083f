//! Discovered modules and the directories that contain them.

use std::path::{Path, PathBuf};

/// A discovered source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path to the module file.
    pub path: PathBuf,
    /// File name of the module, including its extension.
    pub name: String,
}

impl Location {
    /// Create a location, taking the name from the last path component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// A directory in the discovered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    /// Path to the directory.
    pub path: PathBuf,
    /// Directory name (last path component).
    pub name: String,
    /// Modules directly inside this directory, sorted by name.
    pub files: Vec<Location>,
    /// Sub-directories, sorted by name.
    pub directories: Vec<Directory>,
    /// The existing barrel file, if there is one.
    pub barrel: Option<Location>,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            ..Self::default()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All modules in this directory and every sub-directory, depth first.
    pub fn modules(&self) -> Vec<Location> {
        let mut modules = self.files.clone();
        for directory in &self.directories {
            modules.extend(directory.modules());
        }
        modules
    }

    /// This directory followed by every descendant, depth first.
    pub fn walk(&self) -> Vec<&Directory> {
        let mut all = vec![self];
        for directory in &self.directories {
            all.extend(directory.walk());
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Directory {
        let mut root = Directory::new("schemas");
        root.files.push(Location::new("schemas/Two.ts"));

        let mut a = Directory::new("schemas/a");
        a.files.push(Location::new("schemas/a/One.ts"));
        let mut b = Directory::new("schemas/a/b");
        b.files.push(Location::new("schemas/a/b/Foo.ts"));
        a.directories.push(b);
        root.directories.push(a);
        root
    }

    #[test]
    fn test_location_name() {
        let location = Location::new("src/schemas/User.ts");
        assert_eq!(location.name, "User.ts");
    }

    #[test]
    fn test_directory_name() {
        let directory = Directory::new("src/schemas");
        assert_eq!(directory.name, "schemas");
    }

    #[test]
    fn test_modules_collects_subtree() {
        let names: Vec<_> = tree().modules().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Two.ts", "One.ts", "Foo.ts"]);
    }

    #[test]
    fn test_walk_visits_every_directory() {
        let root = tree();
        let names: Vec<_> = root.walk().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["schemas", "a", "b"]);
    }
}
