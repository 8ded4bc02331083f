use std::path::PathBuf;

use barrelgen_core::{QuoteCharacter, Style, Terminator};
use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::{LocationMode, Result, SourceContext, validate::find_value_span};

/// Root schema for barrel.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Barrel generation settings
    #[serde(default)]
    pub barrel: BarrelConfig,
}

/// The `[barrel]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarrelConfig {
    /// Root directories to generate barrels for
    #[serde(deserialize_with = "one_or_many")]
    pub directory: Vec<PathBuf>,

    /// Barrel file name (".ts" is appended when missing)
    pub name: String,

    /// Which directories receive a barrel
    pub location: LocationMode,

    /// Quote style for module specifiers and object keys
    pub quote: QuoteCharacter,

    /// Terminate statements with a semicolon
    pub semicolon: bool,

    /// Resolve import paths relative to this directory instead of the barrel
    pub base_url: Option<PathBuf>,

    /// Only include modules from the barrel's own directory
    pub local: bool,

    /// Regular expressions; when non-empty a module must match one of them
    pub include: Vec<String>,

    /// Regular expressions; a module matching any of them is skipped
    pub exclude: Vec<String>,

    /// Prepend the generated-file header
    pub header: bool,

    /// Schema type referenced by nested exports
    pub schema: SchemaConfig,
}

/// The `[barrel.schema]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Type every nested leaf is cast to
    pub type_name: String,
    /// Module the type is imported from
    pub type_import: String,
}

impl Default for BarrelConfig {
    fn default() -> Self {
        Self {
            directory: vec![PathBuf::from("./")],
            name: "index.ts".to_string(),
            location: LocationMode::default(),
            quote: QuoteCharacter::default(),
            semicolon: true,
            base_url: None,
            local: false,
            include: Vec::new(),
            exclude: Vec::new(),
            header: true,
            schema: SchemaConfig::default(),
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            type_name: "JSONSchema".to_string(),
            type_import: "json-schema-typed".to_string(),
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(PathBuf),
        Many(Vec<PathBuf>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => vec![path],
        OneOrMany::Many(paths) => paths,
    })
}

impl Manifest {
    /// Parse a manifest from a string with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.barrel.validate(&ctx)?;
        Ok(manifest)
    }
}

impl std::str::FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "barrel.toml")
    }
}

impl BarrelConfig {
    /// Validate settings, pointing at the offending value in `ctx` when possible.
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.directory.is_empty() {
            return Err(ctx.validation_error(
                "at least one directory is required",
                find_value_span(ctx.src(), "directory"),
            ));
        }

        let name = self.name.trim();
        if name.is_empty() || name == ".ts" {
            return Err(ctx.validation_error(
                "barrel name must not be empty",
                find_value_span(ctx.src(), "name"),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ctx.validation_error(
                format!("barrel name '{}' must be a file name, not a path", name),
                find_value_span(ctx.src(), "name"),
            ));
        }

        if self.schema.type_name.trim().is_empty() {
            return Err(ctx.validation_error(
                "schema type name must not be empty",
                find_value_span(ctx.src(), "type_name"),
            ));
        }

        for pattern in self.include.iter().chain(&self.exclude) {
            if let Err(e) = Regex::new(pattern) {
                return Err(ctx.invalid_pattern_error(
                    pattern,
                    e.to_string(),
                    find_value_span(ctx.src(), pattern),
                ));
            }
        }

        Ok(())
    }

    /// The barrel file name, with ".ts" appended when missing.
    pub fn file_name(&self) -> String {
        let name = self.name.trim();
        if name.ends_with(".ts") {
            name.to_string()
        } else {
            format!("{}.ts", name)
        }
    }

    /// Output style derived from the quote and semicolon settings.
    pub fn style(&self) -> Style {
        Style::new(self.quote, Terminator::from_semicolon(self.semicolon))
    }

    /// Compiled include patterns. Invalid patterns are rejected by [`Self::validate`].
    pub fn include_patterns(&self) -> Vec<Regex> {
        compile(&self.include)
    }

    /// Compiled exclude patterns. Invalid patterns are rejected by [`Self::validate`].
    pub fn exclude_patterns(&self) -> Vec<Regex> {
        compile(&self.exclude)
    }
}

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
}
