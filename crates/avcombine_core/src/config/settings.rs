//! Settings struct with TOML-based sections.
//!
//! Every field has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// External tool locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Program name (looked up on PATH) or path of the ffmpeg binary.
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffmpeg: default_ffmpeg(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level for diagnostics on stderr (RUST_LOG takes precedence).
    #[serde(default)]
    pub level: LogLevel,

    /// Also write the run log to this file when non-empty.
    #[serde(default)]
    pub log_file: String,

    /// Prefix log file lines with a timestamp.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,

    /// Echo the ffmpeg command one option per line.
    #[serde(default)]
    pub show_command_pretty: bool,

    /// Echo the ffmpeg arguments as a JSON array.
    #[serde(default)]
    pub show_command_json: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_file: String::new(),
            show_timestamps: default_true(),
            show_command_pretty: false,
            show_command_json: false,
        }
    }
}
