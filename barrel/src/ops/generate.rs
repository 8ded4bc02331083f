//! Generate operation - render and write barrels.

use barrelgen_codegen_typescript::{BarrelCodegen, Generator};
use barrelgen_config::BarrelConfig;
use eyre::{Context, Result};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: &BarrelConfig, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(config).wrap_err("Failed to discover modules")?;
    info!(
        language = generator.language(),
        barrels = generator.preview().len(),
        "rendered barrels"
    );

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        GenerationResult::Written(generator.generate().wrap_err("Failed to write barrels")?)
    };

    Ok(GenerateReport {
        diagnostics: generator.diagnostics(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn config(temp: &TempDir) -> BarrelConfig {
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a/One.ts"), "export default {};").unwrap();
        BarrelConfig {
            directory: vec![temp.path().to_path_buf()],
            ..BarrelConfig::default()
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = generate(&config(&temp), GenerateOptions { dry_run: true }).unwrap();

        assert!(matches!(&report.result, GenerationResult::Preview(files) if files.len() == 1));
        assert!(!temp.path().join("index.ts").exists());
    }

    #[test]
    fn test_generate_writes_barrel() {
        let temp = TempDir::new().unwrap();
        let report = generate(&config(&temp), GenerateOptions { dry_run: false }).unwrap();

        assert!(matches!(&report.result, GenerationResult::Written(r) if r.written.len() == 1));
        assert!(temp.path().join("index.ts").exists());
    }
}
