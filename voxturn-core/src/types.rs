//! Core types for voxturn-core

use serde::{Deserialize, Serialize};

/// Word or subword emitted by a speech recognizer.
///
/// Field names follow the recognizer's `timestamps[]` JSON items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognizedToken {
    /// Raw recognized text, usually without punctuation
    pub text: String,
    /// Start time in seconds
    pub start_time: f64,
    /// End time in seconds
    pub end_time: f64,
}

impl RecognizedToken {
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            text: text.into(),
            start_time,
            end_time,
        }
    }

    /// Bracketed metadata such as language tags (`<|en|>`).
    pub fn is_marker(&self) -> bool {
        self.text.starts_with("<|") && (self.text.ends_with("|>") || self.text.ends_with('|'))
    }

    /// Center of the token's time span.
    pub fn midpoint(&self) -> f64 {
        (self.start_time + self.end_time) / 2.0
    }
}

/// Recognized token with the verbatim transcript text attributed to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignedToken {
    #[serde(flatten)]
    pub token: RecognizedToken,
    /// Transcript substring for this token, including trailing punctuation and whitespace
    pub punctuated_text: String,
}

impl AlignedToken {
    pub fn new(token: RecognizedToken, punctuated_text: impl Into<String>) -> Self {
        Self {
            token,
            punctuated_text: punctuated_text.into(),
        }
    }
}

/// Time span attributed to one speaker by the diarizer.
///
/// Field names follow the diarizer's `segments[]` JSON items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    /// Opaque speaker label
    pub speaker: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl SpeakerSegment {
    pub fn new(speaker: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            speaker: speaker.into(),
            start,
            end,
        }
    }

    /// Whether `secs` lies in the closed interval `[start, end]`.
    pub fn contains(&self, secs: f64) -> bool {
        self.start <= secs && secs <= self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Maximal run of consecutive tokens attributed to one speaker.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerTurn {
    pub speaker: String,
    /// Concatenated punctuated text of the turn's tokens
    pub text: String,
    /// First token's start time in seconds
    pub start: f64,
    /// Last token's end time in seconds
    pub end: f64,
}

impl SpeakerTurn {
    /// Open a turn from its first token.
    pub fn open(speaker: impl Into<String>, token: &AlignedToken) -> Self {
        Self {
            speaker: speaker.into(),
            text: token.punctuated_text.clone(),
            start: token.token.start_time,
            end: token.token.end_time,
        }
    }

    /// Append a token of the same speaker.
    pub fn extend(&mut self, token: &AlignedToken) {
        self.text.push_str(&token.punctuated_text);
        self.end = token.token.end_time;
    }

    /// Turn text without the surrounding whitespace carried over from alignment.
    pub fn display_text(&self) -> &str {
        self.text.trim()
    }
}
