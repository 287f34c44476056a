//! Output configuration shared by subcommands.
//!
//! `OutputArgs` is parsed from the command line and resolved into an
//! `Output` destination via `From`; subcommands validate the format.

use eyre::{Context, Result};
use std::path::PathBuf;

/// Rendering format for command output.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// SRT subtitles
    Srt,
}

/// CLI arguments for output destination and format.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Resolved output destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Output {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }
}

impl Output {
    /// Write rendered content to the destination.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Output::Stdout => {
                println!("{content}");
                Ok(())
            }
            Output::File(path) => {
                tracing::info!(path = ?path.display(), "write output file");

                std::fs::write(path, content)
                    .wrap_err_with(|| format!("failed to write output: {:?}", path.display()))
            }
        }
    }
}
