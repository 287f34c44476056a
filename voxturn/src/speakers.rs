//! Speakers subcommand - summarize who spoke and for how long.

use crate::config::{Output, OutputArgs, OutputFormat};
use crate::render;
use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::path::PathBuf;
use voxturn_core::payload::{self, Diarization};
use voxturn_core::summary::DiarizationSummary;

/// CLI arguments for the speaker summary.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Diarizer response JSON
    pub path: PathBuf,

    /// custom_id of the item to use from batch responses (default: first item)
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Resolved configuration for the speaker summary.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub id: Option<String>,
    pub output: Output,
    pub json: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let json = match args.output.format {
            OutputFormat::Text => false,
            OutputFormat::Json => true,
            OutputFormat::Srt => {
                let e = eyre!("speaker summaries cannot be rendered as srt")
                    .suggestion("use `voxturn analyze --format srt` for subtitles");
                return Err(e);
            }
        };

        Ok(Self {
            path: args.path,
            id: args.id,
            output: args.output.output.into(),
            json,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(path = ?config.path.display(), "summarizing speakers");

    let diarization: Diarization = payload::from_file(&config.path, config.id.as_deref())
        .wrap_err_with(|| format!("failed to load diarization: {:?}", config.path.display()))?;

    let summary = DiarizationSummary::from_diarization(&diarization);

    if diarization.num_speakers != summary.num_speakers() {
        tracing::warn!(
            reported = diarization.num_speakers,
            found = summary.num_speakers(),
            "speaker count differs from diarizer report"
        );
    }

    let content = if config.json {
        render::summary_to_json(&summary)?
    } else {
        render::summary_to_text(&summary)
    };

    config.output.write(&content)
}
