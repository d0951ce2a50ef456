//! Reset command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{output, Cli};

/// Recreate empty Unreleased scaffolding after a release merge
#[derive(Debug, Args)]
pub struct ResetCommand {
    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl ResetCommand {
    /// Execute the reset command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = %self.file.display(), "executing reset command");
        logbook_core::reset(&self.file)?;

        if !cli.quiet {
            output::success(&format!(
                "Reset Unreleased section in {}",
                self.file.display()
            ));
            output::success("Created fresh empty section for next release");
        }

        Ok(())
    }
}
