//! Clean operation - delete existing barrels.

use std::fs;

use barrelgen_codegen_typescript::Generator;
use barrelgen_config::BarrelConfig;
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes every file named like a barrel under the configured roots.
pub fn clean(config: &BarrelConfig, opts: CleanOptions) -> Result<CleanReport> {
    let generator = Generator::new(config).wrap_err("Failed to discover modules")?;
    let barrels = generator.existing_barrels();

    if !opts.dry_run {
        for barrel in &barrels {
            debug!(path = %barrel.display(), "deleting barrel");
            fs::remove_file(barrel)
                .wrap_err_with(|| format!("Failed to delete {}", barrel.display()))?;
        }
    }

    Ok(CleanReport {
        dry_run: opts.dry_run,
        deleted: barrels,
    })
}
