//! Warnings collected while building barrels.
//!
//! Generation never fails on naming problems; collisions resolve with
//! last-write-wins and unrenderable names are written as-is. Each case
//! records a diagnostic so it is visible.

use std::fmt;

/// A warning from a generation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The stage that produced this diagnostic (e.g., "imports", "structure").
    pub stage: String,
    pub message: String,
    /// Optional location, usually the barrel or module path.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("imports", "duplicate alias").at("src/index.ts");
        assert_eq!(diag.stage, "imports");
        assert_eq!(diag.location.as_deref(), Some("src/index.ts"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("structure", "duplicate export 'Foo'");
        assert_eq!(diag.to_string(), "warning: duplicate export 'Foo'");

        let diag = diag.at("a/Foo.ts");
        assert_eq!(
            diag.to_string(),
            "warning: duplicate export 'Foo' (at a/Foo.ts)"
        );
    }
}
