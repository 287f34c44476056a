//! Text and JSON rendering of transcripts, analyses and speaker summaries.

use eyre::{Context, Result};
use voxturn_core::payload::AsrTranscript;
use voxturn_core::pipeline::{Analysis, Timeline};
use voxturn_core::summary::DiarizationSummary;

/// Language headline, then one line per timestamp or the plain text.
pub fn transcript_to_text(transcript: &AsrTranscript) -> String {
    let body = match transcript.timestamps.as_deref() {
        Some(tokens) if !tokens.is_empty() => tokens
            .iter()
            .map(|t| format!("[{:.2}s - {:.2}s] {}", t.start_time, t.end_time, t.text))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => transcript.text.clone(),
    };

    format!("Language: {}\n\n{}", transcript.language, body)
}

pub fn timeline_to_json(timeline: &Timeline<'_>) -> Result<String> {
    serde_json::to_string_pretty(timeline).wrap_err("failed to serialize transcript")
}

/// One block per turn: speaker and time range, then the turn text.
pub fn turns_to_text(analysis: &Analysis) -> String {
    analysis
        .turns
        .iter()
        .map(|t| {
            format!(
                "{} [{:.1}s - {:.1}s]\n{}",
                t.speaker,
                t.start,
                t.end,
                t.display_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Turns with colors as a pretty JSON array.
pub fn turns_to_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(&analysis.colored_turns()).wrap_err("failed to serialize turns")
}

/// Speaker count headline followed by one line per speaker.
pub fn summary_to_text(summary: &DiarizationSummary) -> String {
    let mut lines = vec![format!(
        "Found: {} speakers ({:.1}s)",
        summary.num_speakers(),
        summary.duration
    )];

    if let Some(performance) = summary.performance {
        lines.push(format!("Process Time: {performance:.2}s"));
    }

    lines.extend(summary.speakers.iter().map(|s| {
        format!(
            "{} {} segments={} talk_time={:.1}s",
            s.speaker, s.color, s.segments, s.talk_time
        )
    }));

    lines.join("\n")
}

pub fn summary_to_json(summary: &DiarizationSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).wrap_err("failed to serialize speaker summary")
}
