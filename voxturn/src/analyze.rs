//! Analyze subcommand - merge transcript and diarization into speaker turns.

use crate::config::{Output, OutputArgs, OutputFormat};
use crate::{render, srt};
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use voxturn_core::align::Aligner;
use voxturn_core::payload::{self, AsrTranscript, Diarization};
use voxturn_core::pipeline::{Analysis, Analyzer};

/// CLI arguments for transcript analysis.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Recognizer response JSON with word timestamps
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Diarizer response JSON
    #[arg(short, long)]
    pub diarization: PathBuf,

    /// custom_id of the item to use from batch responses (default: first item)
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub aligner: Aligner,
}

/// Resolved configuration for transcript analysis.
#[derive(Debug)]
pub struct Config {
    pub transcript: PathBuf,
    pub diarization: PathBuf,
    pub id: Option<String>,
    pub output: Output,
    pub format: OutputFormat,
    pub analyzer: Analyzer,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            transcript: args.transcript,
            diarization: args.diarization,
            id: args.id,
            output: args.output.output.into(),
            format: args.output.format,
            analyzer: Analyzer::new(args.aligner),
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        transcript = ?config.transcript.display(),
        diarization = ?config.diarization.display(),
        "analyzing transcript"
    );

    let transcript: AsrTranscript = payload::from_file(&config.transcript, config.id.as_deref())
        .wrap_err_with(|| {
            format!(
                "failed to load transcript: {:?}",
                config.transcript.display()
            )
        })?;

    let diarization: Diarization = payload::from_file(&config.diarization, config.id.as_deref())
        .wrap_err_with(|| {
            format!(
                "failed to load diarization: {:?}",
                config.diarization.display()
            )
        })?;

    let s = Instant::now();

    let analysis = config
        .analyzer
        .analyze(&transcript, &diarization)
        .wrap_err("analysis failed")
        .suggestion("transcribe again with return_timestamps enabled")?;

    tracing::info!(
        turns = analysis.turns.len(),
        duration = %format_secs(s.elapsed().as_secs_f32()),
        "analysis completed"
    );

    config.output.write(&render_analysis(&analysis, config.format)?)
}

fn render_analysis(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render::turns_to_text(analysis)),
        OutputFormat::Json => render::turns_to_json(analysis),
        OutputFormat::Srt => Ok(srt::display_subtitles(&srt::to_subtitles(&analysis.turns))),
    }
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
