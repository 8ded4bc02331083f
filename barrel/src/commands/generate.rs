use clap::Args;
use eyre::Result;

use super::options::ConfigArgs;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the barrels without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load()?;
        let report = ops::generate(
            &config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
