//! ffmpeg command options builder.
//!
//! Builds command-line tokens for ffmpeg from a `MuxRequest` and an
//! `EncodeProfile`. Token order is fixed:
//!
//! ```text
//! -i <video> -i <audio> -map 0:v:0 -map 1:a:0
//! -c:v libx264 -crf 18 -preset slow -tune film
//! -c:a aac -b:a 384k -ar 48000 -pix_fmt yuv420p
//! -shortest -movflags +faststart <output>
//! ```
//!
//! Only the three path tokens depend on the request.

use std::path::Path;

use crate::models::MuxRequest;
use crate::mux::EncodeProfile;

/// Builder for ffmpeg command-line options.
///
/// Generates the argument list (without the program name).
pub struct FfmpegArgsBuilder<'a> {
    request: &'a MuxRequest,
    profile: &'a EncodeProfile,
}

impl<'a> FfmpegArgsBuilder<'a> {
    /// Create a new options builder.
    pub fn new(request: &'a MuxRequest, profile: &'a EncodeProfile) -> Self {
        Self { request, profile }
    }

    /// Build the complete ffmpeg argument tokens.
    pub fn build(&self) -> Vec<String> {
        self.build_grouped().concat()
    }

    /// Build the arguments grouped by option: each flag with its value,
    /// a bare switch alone, and the output path last.
    pub fn build_grouped(&self) -> Vec<Vec<String>> {
        let mut options = Vec::with_capacity(16);

        self.add_inputs(&mut options);
        self.add_stream_maps(&mut options);
        self.add_video_options(&mut options);
        self.add_audio_options(&mut options);
        self.add_container_options(&mut options);

        // Output file is always last
        options.push(vec![path_token(&self.request.output)]);

        options
    }

    fn add_inputs(&self, options: &mut Vec<Vec<String>>) {
        push_pair(options, "-i", path_token(&self.request.video));
        push_pair(options, "-i", path_token(&self.request.audio));
    }

    fn add_stream_maps(&self, options: &mut Vec<Vec<String>>) {
        push_pair(options, "-map", self.profile.video_map);
        push_pair(options, "-map", self.profile.audio_map);
    }

    fn add_video_options(&self, options: &mut Vec<Vec<String>>) {
        push_pair(options, "-c:v", self.profile.video_codec);
        push_pair(options, "-crf", self.profile.crf.to_string());
        push_pair(options, "-preset", self.profile.preset);
        push_pair(options, "-tune", self.profile.tune);
    }

    fn add_audio_options(&self, options: &mut Vec<Vec<String>>) {
        push_pair(options, "-c:a", self.profile.audio_codec);
        push_pair(options, "-b:a", self.profile.audio_bitrate);
        push_pair(options, "-ar", self.profile.sample_rate.to_string());
    }

    fn add_container_options(&self, options: &mut Vec<Vec<String>>) {
        push_pair(options, "-pix_fmt", self.profile.pixel_format);
        if self.profile.shortest {
            options.push(vec!["-shortest".to_string()]);
        }
        push_pair(options, "-movflags", self.profile.movflags);
    }
}

fn push_pair(options: &mut Vec<Vec<String>>, flag: &str, value: impl Into<String>) {
    options.push(vec![flag.to_string(), value.into()]);
}

fn path_token(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Format a command for pretty display, one option group per line.
pub fn format_tokens_pretty(program: &str, options: &[Vec<String>]) -> String {
    let mut result = format!("{} \\\n", program);

    for (i, option) in options.iter().enumerate() {
        let line: Vec<String> = option.iter().map(|t| shell_quote(t)).collect();
        let end = if i + 1 == options.len() { "\n" } else { " \\\n" };
        result.push_str(&format!("  {}{}", line.join(" "), end));
    }

    result
}

/// Format a command on one line, quoting tokens a shell would split.
pub fn format_command_line(program: &str, tokens: &[String]) -> String {
    let mut parts = Vec::with_capacity(tokens.len() + 1);
    parts.push(shell_quote(program));
    parts.extend(tokens.iter().map(|t| shell_quote(t)));
    parts.join(" ")
}

fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:+=,@%".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
