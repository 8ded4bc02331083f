//! TypeScript barrel generator.

use std::path::PathBuf;

use barrelgen_codegen::{
    BarrelCodegen, Diagnostic, PreviewFile, TypeScriptResolver,
    destinations::{barrel_modules, destinations},
    discovery::{ModuleFilter, discover},
};
use barrelgen_config::BarrelConfig;
use barrelgen_core::Directory;
use eyre::Result;
use tracing::debug;

use crate::{barrel::build_filesystem_barrel, header::add_header};

/// Generator that renders one barrel per destination directory.
///
/// Barrels are rendered when the generator is built, so `preview`,
/// `generate` and `check` all see the same content.
#[derive(Debug)]
pub struct Generator {
    roots: Vec<Directory>,
    barrels: Vec<PreviewFile>,
    diagnostics: Vec<Diagnostic>,
}

impl BarrelCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.barrels.clone()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.clone()
    }
}

impl Generator {
    /// Discover every configured root directory and render its barrels.
    pub fn new(config: &BarrelConfig) -> Result<Self> {
        let filter = ModuleFilter::new(config.file_name())
            .with_include(config.include_patterns())
            .with_exclude(config.exclude_patterns());

        let roots = config
            .directory
            .iter()
            .map(|root| discover(root, &filter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_roots(roots, config))
    }

    /// Render barrels for already discovered trees.
    pub fn from_roots(roots: Vec<Directory>, config: &BarrelConfig) -> Self {
        let resolver = match &config.base_url {
            Some(base_url) => TypeScriptResolver::with_base_url(base_url),
            None => TypeScriptResolver::new(),
        };
        let style = config.style();
        let file_name = config.file_name();

        let mut barrels = Vec::new();
        let mut diagnostics = Vec::new();

        for root in &roots {
            for directory in destinations(root, config.location) {
                let modules = barrel_modules(directory, config.local);
                let path = directory.path.join(&file_name);
                debug!(
                    path = %path.display(),
                    modules = modules.len(),
                    "building barrel"
                );

                let body = build_filesystem_barrel(
                    directory,
                    &modules,
                    style,
                    &resolver,
                    &config.schema.type_name,
                );

                diagnostics.extend(body.diagnostics.into_iter().map(|diagnostic| {
                    let at = match &diagnostic.location {
                        Some(location) => format!("{} ({})", path.display(), location),
                        None => path.display().to_string(),
                    };
                    diagnostic.at(at)
                }));

                let content = if config.header {
                    add_header(&body.content, style, &config.schema)
                } else {
                    body.content
                };
                barrels.push(PreviewFile { path, content });
            }
        }

        Self {
            roots,
            barrels,
            diagnostics,
        }
    }

    /// Barrels already present in the discovered trees.
    pub fn existing_barrels(&self) -> Vec<PathBuf> {
        self.roots
            .iter()
            .flat_map(|root| root.walk())
            .filter_map(|directory| directory.barrel.as_ref())
            .map(|barrel| barrel.path.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use barrelgen_config::LocationMode;
    use barrelgen_core::Location;

    use super::*;

    fn tree() -> Directory {
        let mut root = Directory::new("src");
        root.files.push(Location::new("src/Two.ts"));

        let mut a = Directory::new("src/a");
        a.files.push(Location::new("src/a/One.ts"));
        a.barrel = Some(Location::new("src/a/index.ts"));

        root.directories.push(a);
        root
    }

    #[test]
    fn test_one_barrel_per_destination() {
        let config = BarrelConfig {
            location: LocationMode::All,
            header: false,
            ..BarrelConfig::default()
        };
        let generator = Generator::from_roots(vec![tree()], &config);
        let paths: Vec<_> = generator.preview().into_iter().map(|p| p.path).collect();

        assert_eq!(
            paths,
            vec![PathBuf::from("src/index.ts"), PathBuf::from("src/a/index.ts")]
        );
    }

    #[test]
    fn test_header_is_prepended() {
        let generator = Generator::from_roots(vec![tree()], &BarrelConfig::default());
        let preview = generator.preview();

        assert_eq!(preview.len(), 1);
        assert!(preview[0].content.starts_with("/**\n"));
        assert!(
            preview[0]
                .content
                .contains("import { JSONSchema } from \"json-schema-typed\";\n")
        );
    }

    #[test]
    fn test_existing_barrels() {
        let generator = Generator::from_roots(vec![tree()], &BarrelConfig::default());
        assert_eq!(
            generator.existing_barrels(),
            vec![PathBuf::from("src/a/index.ts")]
        );
    }

    #[test]
    fn test_diagnostics_carry_barrel_path() {
        let mut root = Directory::new("src");
        root.files.push(Location::new("src/Foo.ts"));
        root.files.push(Location::new("src/Foo.bar.ts"));

        let generator = Generator::from_roots(vec![root], &BarrelConfig::default());
        let diagnostics = generator.diagnostics();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some(format!("{} (Foo)", PathBuf::from("src/index.ts").display()).as_str())
        );
    }
}
