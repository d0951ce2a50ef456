//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    CompletionsCommand, ExtractNotesCommand, FinalizeCommand, PrepareCommand, ResetCommand,
    ValidateCommand,
};

/// Logbook - CHANGELOG release-workflow management CLI
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Move Unreleased entries into a new version section with a TBD date
    Prepare(PrepareCommand),

    /// Check that the Unreleased section exists and has content
    Validate(ValidateCommand),

    /// Recreate empty Unreleased scaffolding after a release merge
    Reset(ResetCommand),

    /// Replace a version's TBD placeholder with the release date
    Finalize(FinalizeCommand),

    /// Print the release notes for a version
    ExtractNotes(ExtractNotesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Prepare(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Reset(ref cmd) => cmd.execute(&self),
            Commands::Finalize(ref cmd) => cmd.execute(&self),
            Commands::ExtractNotes(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }
}
