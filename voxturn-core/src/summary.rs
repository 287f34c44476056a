//! Speaker colors and per-speaker statistics of a diarization result.

use crate::payload::Diarization;
use crate::types::SpeakerSegment;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Colors handed out to speakers in order of assignment.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Stable speaker to color assignment.
///
/// A speaker receives the next palette color the first time it is seen; the
/// palette wraps around once exhausted.
#[derive(Clone, Debug, Default)]
pub struct SpeakerPalette {
    assigned: HashMap<String, &'static str>,
}

impl SpeakerPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of `speaker`, assigning one on first use.
    pub fn color(&mut self, speaker: &str) -> &'static str {
        if let Some(color) = self.assigned.get(speaker) {
            return *color;
        }

        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(speaker.to_string(), color);
        color
    }

    /// Number of speakers seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Talk statistics for one speaker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeakerStats {
    pub speaker: String,
    pub color: &'static str,
    /// Number of diarization segments
    pub segments: usize,
    /// Sum of segment durations in seconds
    pub talk_time: f64,
}

/// Overview of a diarization result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiarizationSummary {
    /// Latest segment end in seconds
    pub duration: f64,
    /// Speakers sorted by label
    pub speakers: Vec<SpeakerStats>,
    /// Processing time reported by the diarizer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
}

impl DiarizationSummary {
    /// Summarize segments; colors follow the sorted speaker order.
    pub fn from_segments(segments: &[SpeakerSegment]) -> Self {
        let duration = segments.iter().map(|s| s.end).fold(0.0, f64::max);

        let mut by_speaker: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for segment in segments {
            let entry = by_speaker.entry(segment.speaker.as_str()).or_default();
            entry.0 += 1;
            entry.1 += segment.duration();
        }

        let mut palette = SpeakerPalette::new();
        let speakers = by_speaker
            .into_iter()
            .map(|(speaker, (segments, talk_time))| SpeakerStats {
                speaker: speaker.to_string(),
                color: palette.color(speaker),
                segments,
                talk_time,
            })
            .collect();

        Self {
            duration,
            speakers,
            performance: None,
        }
    }

    /// Summarize a diarizer response, keeping its reported processing time.
    pub fn from_diarization(diarization: &Diarization) -> Self {
        Self {
            performance: diarization.performance,
            ..Self::from_segments(&diarization.segments)
        }
    }

    pub fn num_speakers(&self) -> usize {
        self.speakers.len()
    }
}
