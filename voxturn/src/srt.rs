//! SRT subtitle conversion utilities.
//!
//! Converts speaker turns into SRT subtitles prefixed with the speaker label,
//! and aligned tokens into one subtitle per word.

use srtlib::{Subtitle, Timestamp};
use voxturn_core::types::{AlignedToken, SpeakerTurn};

/// Convert speaker turns to SRT subtitles.
pub fn to_subtitles(turns: &[SpeakerTurn]) -> Vec<Subtitle> {
    turns
        .iter()
        .zip(1..)
        .map(|(t, i)| {
            create_subtitle(
                i,
                t.start,
                t.end,
                format!("{}: {}", t.speaker, t.display_text()),
            )
        })
        .collect()
}

/// Convert aligned tokens to SRT subtitles with their punctuated text.
pub fn tokens_to_subtitles(tokens: &[AlignedToken]) -> Vec<Subtitle> {
    tokens
        .iter()
        .zip(1..)
        .map(|(t, i)| {
            create_subtitle(
                i,
                t.token.start_time,
                t.token.end_time,
                t.punctuated_text.trim().to_string(),
            )
        })
        .collect()
}

fn create_subtitle(index: usize, start: f64, end: f64, text: String) -> Subtitle {
    Subtitle::new(index, secs_to_timestamp(start), secs_to_timestamp(end), text)
}

/// Convert seconds to SRT Timestamp
fn secs_to_timestamp(secs: f64) -> Timestamp {
    Timestamp::from_milliseconds((secs.max(0.0) * 1000.0).round() as u32)
}

/// Format subtitles as SRT file content.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
