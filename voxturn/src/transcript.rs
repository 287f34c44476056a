//! Transcript subcommand - word timeline of a recognizer response.

use crate::config::{Output, OutputArgs, OutputFormat};
use crate::{render, srt};
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::PathBuf;
use voxturn_core::align::Aligner;
use voxturn_core::payload::{self, AsrTranscript};
use voxturn_core::pipeline::Analyzer;

/// CLI arguments for the transcript timeline.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Recognizer response JSON
    pub path: PathBuf,

    /// custom_id of the item to use from batch responses (default: first item)
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub aligner: Aligner,
}

/// Resolved configuration for the transcript timeline.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub id: Option<String>,
    pub output: Output,
    pub format: OutputFormat,
    pub analyzer: Analyzer,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            path: args.path,
            id: args.id,
            output: args.output.output.into(),
            format: args.output.format,
            analyzer: Analyzer::new(args.aligner),
        }
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(path = ?config.path.display(), "reading transcript");

    let transcript: AsrTranscript = payload::from_file(&config.path, config.id.as_deref())
        .wrap_err_with(|| format!("failed to load transcript: {:?}", config.path.display()))?;

    tracing::info!(
        language = %transcript.language,
        performance = ?transcript.performance,
        "transcript loaded"
    );

    let content = match config.format {
        OutputFormat::Text => render::transcript_to_text(&transcript),
        OutputFormat::Json => render::timeline_to_json(&config.analyzer.timeline(&transcript))?,
        OutputFormat::Srt => {
            transcript
                .tokens()
                .wrap_err("cannot build subtitles")
                .suggestion("transcribe again with return_timestamps enabled")?;

            let timeline = config.analyzer.timeline(&transcript);
            srt::display_subtitles(&srt::tokens_to_subtitles(&timeline.tokens))
        }
    };

    config.output.write(&content)
}
