//! Muxing module for ffmpeg integration.
//!
//! This module builds the ffmpeg command that combines one video file and
//! one audio file into a single output.
//!
//! # Architecture
//!
//! - **profile**: The fixed `EncodeProfile` (codecs, quality, container flags)
//! - **args_builder**: Converts a `MuxRequest` + profile into ffmpeg tokens

mod args_builder;
mod profile;

pub use args_builder::{format_command_line, format_tokens_pretty, FfmpegArgsBuilder};
pub use profile::EncodeProfile;
