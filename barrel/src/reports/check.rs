//! Check command report data structures.

use std::path::PathBuf;

use barrelgen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from comparing barrels with disk.
#[derive(Debug)]
pub struct CheckReport {
    /// Collisions found while building the barrels.
    pub diagnostics: Vec<Diagnostic>,
    /// Barrels that are missing or differ from the generated content.
    pub stale: Vec<PathBuf>,
    /// Barrels that match the generated content.
    pub up_to_date: Vec<PathBuf>,
}

impl CheckReport {
    /// Whether every barrel is up to date.
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_clean() {
            out.preformatted(&format!(
                "✓ {} barrel{} up to date",
                self.up_to_date.len(),
                if self.up_to_date.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        out.section("Out of date");
        for path in &self.stale {
            out.list_item(&path.display().to_string());
        }
        out.newline();
        out.preformatted("Run `barrel generate` to update them.");
    }
}
