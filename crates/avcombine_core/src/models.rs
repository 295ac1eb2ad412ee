//! Data types shared across the combine flow.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which of the two inputs a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Video,
    Audio,
}

impl InputRole {
    /// Label used in prompts and messages.
    pub fn label(&self) -> &'static str {
        match self {
            InputRole::Video => "Video",
            InputRole::Audio => "Audio",
        }
    }
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three paths collected for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuxRequest {
    /// Video-only source file.
    pub video: PathBuf,
    /// Audio source file.
    pub audio: PathBuf,
    /// Destination file. May already exist; ffmpeg overwrites it.
    pub output: PathBuf,
}

impl MuxRequest {
    pub fn new(
        video: impl Into<PathBuf>,
        audio: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            video: video.into(),
            audio: audio.into(),
            output: output.into(),
        }
    }

    /// Path of the given input.
    pub fn input(&self, role: InputRole) -> &Path {
        match role {
            InputRole::Video => &self.video,
            InputRole::Audio => &self.audio,
        }
    }
}

/// Answers supplied before prompting (e.g. from command-line arguments).
///
/// Any field left as `None` is asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub video: Option<String>,
    pub audio: Option<String>,
    pub output: Option<String>,
}

/// Result of a run that reached the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The tool exited with code 0.
    Succeeded { output: PathBuf },
    /// The tool exited non-zero. `exit_code` is `None` if it was killed by a signal.
    ToolFailed { exit_code: Option<i32> },
    /// Nothing was executed; the command was only printed.
    DryRun,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::ToolFailed { .. })
    }

    /// Process exit code this outcome maps to.
    ///
    /// The tool's own failure code is propagated; a signal-terminated tool maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Succeeded { .. } | RunOutcome::DryRun => 0,
            RunOutcome::ToolFailed { exit_code } => match exit_code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
        }
    }
}
