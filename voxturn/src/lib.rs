//! voxturn: command-line front end for voxturn-core.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod render;
pub mod speakers;
pub mod srt;
pub mod transcript;
