//! Prepare command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use crate::cli::{output, Cli, OutputFormat};

/// Move Unreleased entries into a new version section with a TBD date
#[derive(Debug, Args)]
#[command(disable_version_flag = true)]
pub struct PrepareCommand {
    /// Semantic version (e.g., 1.0.0)
    pub version: String,

    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl PrepareCommand {
    /// Execute the prepare command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, file = %self.file.display(), "executing prepare command");
        let sections = logbook_core::prepare(&self.version, &self.file)?;

        match cli.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "version": self.version,
                    "sections": sections.names(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Prepared CHANGELOG for version {}",
                        style(&self.version).green().bold()
                    ));
                    if sections.is_empty() {
                        output::warning("No content found in Unreleased section");
                    } else {
                        output::success(&format!(
                            "Moved {} section(s) with content to [{}] - TBD",
                            sections.len(),
                            self.version
                        ));
                        for name in sections.names() {
                            println!("  - {}", name);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
