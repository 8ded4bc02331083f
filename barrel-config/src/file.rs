use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "barrel.toml";

/// Represents a barrel.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct BarrelToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl BarrelToml {
    /// Open and parse a barrel.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open `path` if it exists, otherwise fall back to the default manifest.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                manifest: Manifest::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when the defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the file and return the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
