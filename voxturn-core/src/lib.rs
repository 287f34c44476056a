//! voxturn-core: speaker-attributed transcripts from ASR and diarization output.
//!
//! A speech recognizer reports bare tokens with timestamps and, separately, a
//! punctuated transcript of the same audio. A diarizer reports who spoke when.
//! This crate joins the three into readable speaker turns.
//!
//! # Stages
//!
//! - [`align::Aligner`]: recovers punctuation and casing for every token
//! - [`merge::merge`]: groups consecutive tokens of the same speaker into turns
//! - [`pipeline::Analyzer`]: runs both stages over recognizer and diarizer payloads
//!
//! # Quick Start
//!
//! ```ignore
//! use voxturn_core::payload::{self, AsrTranscript, Diarization};
//! use voxturn_core::pipeline::Analyzer;
//!
//! let transcript: AsrTranscript = payload::from_file("asr.json", None)?;
//! let diarization: Diarization = payload::from_file("diarization.json", None)?;
//!
//! let analysis = Analyzer::default().analyze(&transcript, &diarization)?;
//! for turn in &analysis.turns {
//!     println!("{}: {}", turn.speaker, turn.display_text());
//! }
//! ```

pub mod align;
pub mod error;
pub mod merge;
pub mod payload;
pub mod pipeline;
pub mod summary;
pub mod types;
