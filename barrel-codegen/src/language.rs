//! Language-agnostic barrel generation traits.

use std::path::PathBuf;

use barrelgen_core::{File, WriteResult};
use eyre::Result;
use tracing::info;

use crate::Diagnostic;

/// Trait for language-specific barrel generators.
///
/// Implementors only render barrels; writing and checking them against disk
/// is shared.
pub trait BarrelCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Preview generated barrels without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Diagnostics collected while building the barrels
    fn diagnostics(&self) -> Vec<Diagnostic>;

    /// Write every barrel, leaving files whose content is unchanged untouched
    fn generate(&self) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for preview in self.preview() {
            let file = File::new(&preview.path, preview.content);
            match file.write()? {
                WriteResult::Written => {
                    info!(path = %preview.path.display(), "wrote barrel");
                    result.written.push(preview.path);
                }
                WriteResult::Unchanged => result.unchanged.push(preview.path),
            }
        }
        Ok(result)
    }

    /// Compare every barrel with what is on disk
    fn check(&self) -> CheckResult {
        let mut result = CheckResult::default();
        for preview in self.preview() {
            let file = File::new(&preview.path, preview.content);
            if file.is_up_to_date() {
                result.up_to_date.push(preview.path);
            } else {
                result.stale.push(preview.path);
            }
        }
        result
    }
}

/// A generated barrel for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the barrel is written to
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Result of barrel generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Barrels that were written
    pub written: Vec<PathBuf>,
    /// Barrels that already had the generated content
    pub unchanged: Vec<PathBuf>,
}

/// Result of comparing barrels with disk
#[derive(Debug, Default)]
pub struct CheckResult {
    /// Barrels that are missing or differ from the generated content
    pub stale: Vec<PathBuf>,
    /// Barrels that match the generated content
    pub up_to_date: Vec<PathBuf>,
}

impl CheckResult {
    /// True when no barrel is stale.
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed {
        files: Vec<PreviewFile>,
    }

    impl BarrelCodegen for Fixed {
        fn language(&self) -> &'static str {
            "test"
        }

        fn preview(&self) -> Vec<PreviewFile> {
            self.files.clone()
        }

        fn diagnostics(&self) -> Vec<Diagnostic> {
            Vec::new()
        }
    }

    fn generator(temp: &TempDir) -> Fixed {
        Fixed {
            files: vec![
                PreviewFile {
                    path: temp.path().join("index.ts"),
                    content: "export {};\n".to_string(),
                },
                PreviewFile {
                    path: temp.path().join("a").join("index.ts"),
                    content: "export {};\n".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_generate_writes_then_skips() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        let first = generator.generate().unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.unchanged.is_empty());

        let second = generator.generate().unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 2);
    }

    #[test]
    fn test_check_reports_stale_barrels() {
        let temp = TempDir::new().unwrap();
        let generator = generator(&temp);

        let before = generator.check();
        assert!(!before.is_clean());
        assert_eq!(before.stale.len(), 2);

        generator.generate().unwrap();
        fs::write(temp.path().join("index.ts"), "// edited").unwrap();

        let after = generator.check();
        assert_eq!(after.stale, vec![temp.path().join("index.ts")]);
        assert_eq!(after.up_to_date.len(), 1);
    }
}
