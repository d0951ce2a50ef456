//! Extract-notes command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Print the release notes for a version
#[derive(Debug, Args)]
#[command(disable_version_flag = true)]
pub struct ExtractNotesCommand {
    /// Semantic version (e.g., 1.0.0)
    pub version: String,

    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl ExtractNotesCommand {
    /// Execute the extract-notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, file = %self.file.display(), "executing extract-notes command");
        let notes = logbook_core::extract_notes(&self.version, &self.file)?;

        if notes.is_empty() {
            output::error(&format!("No changelog notes found for {}", self.version));
            std::process::exit(exit_codes::ERROR);
        }

        match cli.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "version": self.version,
                    "notes": notes,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                println!("{}", notes);
            }
        }

        Ok(())
    }
}
