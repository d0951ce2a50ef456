//! Finalize command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{output, Cli};

/// Replace a version's TBD placeholder with the release date
#[derive(Debug, Args)]
#[command(disable_version_flag = true)]
pub struct FinalizeCommand {
    /// Semantic version (e.g., 1.0.0)
    pub version: String,

    /// Release date in ISO format (YYYY-MM-DD)
    pub date: String,

    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl FinalizeCommand {
    /// Execute the finalize command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = %self.version,
            date = %self.date,
            file = %self.file.display(),
            "executing finalize command"
        );
        logbook_core::finalize(&self.version, &self.date, &self.file)?;

        if !cli.quiet {
            output::success(&format!("Set release date for version {}", self.version));
            output::success(&format!("Date: {}", self.date));
        }

        Ok(())
    }
}
