//! Transcript analysis pipeline: align, then merge with speakers.

use crate::align::Aligner;
use crate::error::Result;
use crate::merge::merge;
use crate::payload::{AsrTranscript, Diarization};
use crate::summary::SpeakerPalette;
use crate::types::{AlignedToken, SpeakerTurn};
use serde::Serialize;

/// Result of analysing one audio item.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Tokens with recovered punctuation
    pub tokens: Vec<AlignedToken>,
    /// Speaker turns in time order
    pub turns: Vec<SpeakerTurn>,
}

/// Speaker turn annotated with its display color.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColoredTurn<'a> {
    pub speaker: &'a str,
    pub color: &'static str,
    pub start: f64,
    pub end: f64,
    pub text: &'a str,
}

impl Analysis {
    /// Turns with colors assigned in order of first appearance.
    pub fn colored_turns(&self) -> Vec<ColoredTurn<'_>> {
        let mut palette = SpeakerPalette::new();

        self.turns
            .iter()
            .map(|turn| ColoredTurn {
                speaker: &turn.speaker,
                color: palette.color(&turn.speaker),
                start: turn.start,
                end: turn.end,
                text: turn.display_text(),
            })
            .collect()
    }
}

/// Recognizer output with punctuation recovered for every token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline<'a> {
    pub language: &'a str,
    pub text: &'a str,
    /// Processing time reported by the recognizer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    /// Aligned tokens, empty when the transcript has no word timestamps
    pub tokens: Vec<AlignedToken>,
}

/// Speaker-attributed transcript builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Analyzer {
    pub aligner: Aligner,
}

impl Analyzer {
    pub fn new(aligner: Aligner) -> Self {
        Self { aligner }
    }

    /// Build speaker turns from a timestamped transcript and a diarization.
    ///
    /// # Errors
    ///
    /// Fails only when the transcript carries no word timestamps.
    pub fn analyze(&self, transcript: &AsrTranscript, diarization: &Diarization) -> Result<Analysis> {
        let tokens = transcript.tokens()?;

        tracing::debug!(
            tokens = tokens.len(),
            chars = transcript.text.chars().count(),
            segments = diarization.segments.len(),
            "aligning transcript"
        );

        let tokens = self.aligner.align(tokens, &transcript.text);
        let turns = merge(&tokens, &diarization.segments);

        tracing::debug!(
            aligned = tokens.len(),
            turns = turns.len(),
            "merged speaker turns"
        );

        Ok(Analysis { tokens, turns })
    }

    /// Align a transcript on its own, without speakers.
    pub fn timeline<'a>(&self, transcript: &'a AsrTranscript) -> Timeline<'a> {
        let tokens = transcript
            .timestamps
            .as_deref()
            .map(|tokens| self.aligner.align(tokens, &transcript.text))
            .unwrap_or_default();

        Timeline {
            language: &transcript.language,
            text: &transcript.text,
            performance: transcript.performance,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, PayloadError};
    use crate::merge::UNKNOWN_SPEAKER;
    use crate::summary::PALETTE;
    use crate::types::{RecognizedToken, SpeakerSegment};

    fn transcript() -> AsrTranscript {
        AsrTranscript {
            custom_id: Some("analysis".to_string()),
            file_id: None,
            text: "Hi there. Hello! How are you?".to_string(),
            language: "English".to_string(),
            timestamps: Some(vec![
                RecognizedToken::new("<|en|>", 0.0, 0.0),
                RecognizedToken::new("hi", 0.0, 0.3),
                RecognizedToken::new("there", 0.3, 0.7),
                RecognizedToken::new("hello", 1.0, 1.4),
                RecognizedToken::new("how", 2.0, 2.2),
                RecognizedToken::new("are", 2.2, 2.4),
                RecognizedToken::new("you", 2.4, 2.8),
            ]),
            performance: None,
        }
    }

    fn diarization(segments: Vec<SpeakerSegment>) -> Diarization {
        Diarization {
            custom_id: Some("analysis".to_string()),
            file_id: None,
            num_speakers: 2,
            segments,
            performance: None,
        }
    }

    #[test]
    fn builds_speaker_turns() {
        let diarization = diarization(vec![
            SpeakerSegment::new("SPEAKER_00", 0.0, 0.9),
            SpeakerSegment::new("SPEAKER_01", 0.9, 1.8),
            SpeakerSegment::new("SPEAKER_00", 1.9, 3.0),
        ]);

        let analysis = Analyzer::default()
            .analyze(&transcript(), &diarization)
            .unwrap();

        assert_eq!(analysis.tokens.len(), 6);

        let turns: Vec<_> = analysis
            .turns
            .iter()
            .map(|t| (t.speaker.as_str(), t.display_text()))
            .collect();

        assert_eq!(
            turns,
            [
                ("SPEAKER_00", "Hi there."),
                ("SPEAKER_01", "Hello!"),
                ("SPEAKER_00", "How are you?"),
            ]
        );
    }

    #[test]
    fn colors_follow_first_appearance() {
        let diarization = diarization(vec![
            SpeakerSegment::new("SPEAKER_01", 0.0, 0.9),
            SpeakerSegment::new("SPEAKER_00", 0.9, 1.8),
            SpeakerSegment::new("SPEAKER_01", 1.9, 3.0),
        ]);

        let analysis = Analyzer::default()
            .analyze(&transcript(), &diarization)
            .unwrap();
        let colors: Vec<_> = analysis.colored_turns().iter().map(|t| t.color).collect();

        assert_eq!(colors, [PALETTE[0], PALETTE[1], PALETTE[0]]);
    }

    #[test]
    fn without_diarization_everything_is_unknown() {
        let analysis = Analyzer::default()
            .analyze(&transcript(), &diarization(Vec::new()))
            .unwrap();

        match &analysis.turns[..] {
            [single] => {
                assert_eq!(single.speaker, UNKNOWN_SPEAKER);
                assert_eq!(single.text, "Hi there. Hello! How are you?");
                assert_eq!((single.start, single.end), (0.0, 2.8));
            }
            _ => panic!("expected 1 turn, got {}", analysis.turns.len()),
        }
    }

    #[test]
    fn timeline_aligns_without_speakers() {
        let transcript = AsrTranscript {
            performance: Some(0.25),
            ..transcript()
        };

        let timeline = Analyzer::default().timeline(&transcript);

        assert_eq!(timeline.language, "English");
        assert_eq!(timeline.performance, Some(0.25));

        let texts: Vec<_> = timeline
            .tokens
            .iter()
            .map(|t| t.punctuated_text.as_str())
            .collect();
        assert_eq!(texts, ["Hi ", "there. ", "Hello! ", "How ", "are ", "you?"]);

        let json = serde_json::to_value(&timeline).unwrap();
        assert_eq!(json["tokens"][1]["text"], "there");
        assert_eq!(json["tokens"][1]["start_time"], 0.3);
        assert_eq!(json["tokens"][1]["punctuated_text"], "there. ");
    }

    #[test]
    fn timeline_without_timestamps_is_empty() {
        let transcript = AsrTranscript {
            timestamps: None,
            ..transcript()
        };

        let timeline = Analyzer::default().timeline(&transcript);

        assert!(timeline.tokens.is_empty());
        assert_eq!(timeline.text, "Hi there. Hello! How are you?");

        let json = serde_json::to_value(&timeline).unwrap();
        assert!(json.get("performance").is_none());
    }

    #[test]
    fn requires_timestamps() {
        let transcript = AsrTranscript {
            timestamps: None,
            ..transcript()
        };

        let result = Analyzer::default().analyze(&transcript, &diarization(Vec::new()));

        assert!(matches!(
            result,
            Err(Error::Payload(PayloadError::MissingTimestamps))
        ));
    }
}
