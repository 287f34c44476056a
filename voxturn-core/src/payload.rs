//! Recognizer and diarizer response bodies.
//!
//! Both services answer with either a single-file body or a batch body of the
//! form `{ "items": [...], "performance": 1.23 }`. Loading resolves a batch to
//! one item, chosen by `custom_id` or defaulting to the first.

use crate::error::{PayloadError, Result};
use crate::types::{RecognizedToken, SpeakerSegment};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Recognizer output for one audio file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsrTranscript {
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    /// Full punctuated transcript
    pub text: String,
    /// Detected or requested language
    #[serde(default)]
    pub language: String,
    /// Word timestamps, present only when requested
    #[serde(default)]
    pub timestamps: Option<Vec<RecognizedToken>>,
    /// Processing time in seconds (single-file responses only)
    #[serde(default)]
    pub performance: Option<f64>,
}

impl AsrTranscript {
    /// Word timestamps, required for alignment.
    pub fn tokens(&self) -> Result<&[RecognizedToken]> {
        self.timestamps
            .as_deref()
            .ok_or_else(|| PayloadError::MissingTimestamps.into())
    }
}

/// Diarizer output for one audio file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diarization {
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    pub segments: Vec<SpeakerSegment>,
    #[serde(default)]
    pub num_speakers: usize,
    /// Processing time in seconds (single-file responses only)
    #[serde(default)]
    pub performance: Option<f64>,
}

/// Item of a batch response that can be picked by `custom_id`.
pub trait BatchItem: DeserializeOwned {
    fn custom_id(&self) -> Option<&str>;
}

impl BatchItem for AsrTranscript {
    fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }
}

impl BatchItem for Diarization {
    fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }
}

/// Parse a response body and resolve it to one item.
///
/// A body with an `items` field is a batch. Items are decoded directly so a
/// malformed item reports the offending field.
pub fn from_json<T: BatchItem>(json: &str, custom_id: Option<&str>) -> Result<T> {
    let mut body: Value = serde_json::from_str(json)?;

    match body.get_mut("items").map(Value::take) {
        Some(items) => select(serde_json::from_value(items)?, custom_id),
        None => Ok(serde_json::from_value(body)?),
    }
}

/// Read a response body from a file and resolve it to one item.
pub fn from_file<T: BatchItem>(path: impl AsRef<Path>, custom_id: Option<&str>) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json, custom_id)
}

fn select<T: BatchItem>(items: Vec<T>, custom_id: Option<&str>) -> Result<T> {
    let Some(custom_id) = custom_id else {
        return items
            .into_iter()
            .next()
            .ok_or_else(|| PayloadError::EmptyBatch.into());
    };

    items
        .into_iter()
        .find(|item| item.custom_id() == Some(custom_id))
        .ok_or_else(|| {
            PayloadError::ItemNotFound {
                custom_id: custom_id.to_string(),
            }
            .into()
        })
}
