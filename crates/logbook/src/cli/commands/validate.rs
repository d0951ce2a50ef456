//! Validate command

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use tracing::info;

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Check that the Unreleased section exists and has content
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = %self.file.display(), "executing validate command");
        let report = logbook_core::validate(&self.file)?;

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_releasable() {
                std::process::exit(exit_codes::ERROR);
            }
            return Ok(());
        }

        if !report.has_section {
            bail!("No Unreleased section found in CHANGELOG");
        }
        if !report.has_content {
            bail!("Unreleased section is empty (no changes to release)");
        }

        if !cli.quiet {
            output::success("CHANGELOG validation passed");
            output::success("Unreleased section exists with content");
        }

        Ok(())
    }
}
