use clap::Args;
use eyre::Result;

use super::options::ConfigArgs;
use crate::{
    ops::{self, clean::CleanOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load()?;
        let report = ops::clean(
            &config,
            CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
