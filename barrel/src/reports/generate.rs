//! Generate command report data structures.

use barrelgen_codegen::{Diagnostic, GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from barrel generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Collisions found while building the barrels.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of barrel generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Barrels were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &GenerateResult) {
    if written.written.is_empty() {
        out.preformatted("All barrels are up to date.");
        return;
    }

    out.section("Generated");
    for path in &written.written {
        out.added_item(&path.display().to_string());
    }

    if !written.unchanged.is_empty() {
        out.newline();
        out.key_value("Unchanged", &written.unchanged.len().to_string());
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path.display().to_string());
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} barrels would be generated", files.len()));
}
