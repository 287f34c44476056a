//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "voxturn")]
#[command(about = "Speaker-attributed transcripts from ASR and diarization output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the word timeline of a recognizer response
    Transcript(crate::transcript::Args),

    /// Align a timestamped transcript and merge it with speaker segments
    Analyze(crate::analyze::Args),

    /// Summarize the speakers of a diarization result
    Speakers(crate::speakers::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Transcript(args) => crate::transcript::execute(args.into()),
        Commands::Analyze(args) => crate::analyze::execute(args.try_into()?),
        Commands::Speakers(args) => crate::speakers::execute(args.try_into()?),
    }
}
