//! Check operation - compare barrels on disk with the generated content.

use barrelgen_codegen_typescript::{BarrelCodegen, Generator};
use barrelgen_config::BarrelConfig;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(config: &BarrelConfig) -> Result<CheckReport> {
    let generator = Generator::new(config).wrap_err("Failed to discover modules")?;
    let result = generator.check();

    Ok(CheckReport {
        diagnostics: generator.diagnostics(),
        stale: result.stale,
        up_to_date: result.up_to_date,
    })
}
