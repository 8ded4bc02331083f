use std::path::PathBuf;

use barrelgen_config::{BarrelConfig, BarrelToml, CONFIG_FILENAME, LocationMode, SourceContext};
use barrelgen_core::QuoteCharacter;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

/// barrel.toml location and per-run overrides shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to barrel.toml (defaults to ./barrel.toml when it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory to scan; repeat for several roots
    #[arg(short, long = "directory")]
    pub directory: Vec<PathBuf>,

    /// Barrel file name (".ts" is appended when missing)
    #[arg(long)]
    pub name: Option<String>,

    /// Which directories receive a barrel: top, below, all, replace, branch
    #[arg(short, long)]
    pub location: Option<LocationMode>,

    /// Quote import paths and keys with '
    #[arg(long, conflicts_with = "double_quotes")]
    pub single_quotes: bool,

    /// Quote import paths and keys with "
    #[arg(long)]
    pub double_quotes: bool,

    /// Omit the semicolon after statements
    #[arg(long)]
    pub no_semicolon: bool,

    /// Resolve import paths against this directory instead of the barrel
    #[arg(long)]
    pub base_url: Option<PathBuf>,

    /// Only include modules whose path matches; repeatable
    #[arg(long)]
    pub include: Vec<String>,

    /// Skip modules whose path matches; repeatable
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Only export modules from the barrel's own directory
    #[arg(long)]
    pub local: bool,

    /// Do not prepend the generated-file header
    #[arg(long)]
    pub no_header: bool,
}

impl ConfigArgs {
    /// Read barrel.toml, apply overrides and validate.
    ///
    /// A missing ./barrel.toml falls back to the defaults; a missing file
    /// passed with `--config` is an error. Directories and the base URL are
    /// made absolute against the current directory.
    pub fn load(&self) -> Result<BarrelConfig> {
        let barrel_toml = match &self.config {
            Some(path) => BarrelToml::open(path),
            None => BarrelToml::open_or_default(CONFIG_FILENAME),
        }
        .unwrap_or_exit();
        let ctx = SourceContext::new(
            barrel_toml.content(),
            barrel_toml.path().display().to_string(),
        );

        let config = self.apply(barrel_toml.into_manifest().barrel);
        config.validate(&ctx).unwrap_or_exit();
        absolutize(config)
    }

    /// Overlay the command line flags on `config`.
    pub fn apply(&self, mut config: BarrelConfig) -> BarrelConfig {
        if !self.directory.is_empty() {
            config.directory = self.directory.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(location) = self.location {
            config.location = location;
        }
        if self.single_quotes {
            config.quote = QuoteCharacter::Single;
        }
        if self.double_quotes {
            config.quote = QuoteCharacter::Double;
        }
        if self.no_semicolon {
            config.semicolon = false;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        config.include.extend(self.include.iter().cloned());
        config.exclude.extend(self.exclude.iter().cloned());
        config.local |= self.local;
        config.header &= !self.no_header;
        config
    }
}

fn absolutize(mut config: BarrelConfig) -> Result<BarrelConfig> {
    config.directory = config
        .directory
        .iter()
        .map(|dir| {
            std::path::absolute(dir)
                .wrap_err_with(|| format!("Failed to resolve directory {}", dir.display()))
        })
        .collect::<Result<_>>()?;

    if let Some(base_url) = &config.base_url {
        let resolved = std::path::absolute(base_url)
            .wrap_err_with(|| format!("Failed to resolve base URL {}", base_url.display()))?;
        config.base_url = Some(resolved);
    }

    Ok(config)
}
