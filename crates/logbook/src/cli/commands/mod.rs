//! CLI commands

mod completions;
mod extract_notes;
mod finalize;
mod prepare;
mod reset;
mod validate;

pub use completions::CompletionsCommand;
pub use extract_notes::ExtractNotesCommand;
pub use finalize::FinalizeCommand;
pub use prepare::PrepareCommand;
pub use reset::ResetCommand;
pub use validate::ValidateCommand;
