//! Per-run logger with console and optional file output.
//!
//! Every user-facing line of a run goes through this logger:
//! - Sent to the console sink (stdout in the binary)
//! - Appended to a log file when one is configured, with timestamps

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::types::{ConsoleSink, LogConfig, LogLevel, MessagePrefix};

/// Logger for one combine run.
pub struct RunLogger {
    /// Path to log file, if any.
    log_path: Option<PathBuf>,
    /// File writer (buffered).
    file_writer: Mutex<Option<BufWriter<File>>>,
    /// Console sink.
    console: ConsoleSink,
    config: LogConfig,
}

impl RunLogger {
    /// Create a new run logger.
    ///
    /// # Arguments
    /// * `config` - Logging configuration
    /// * `console` - Receives every console line
    /// * `log_file` - Optional file the log is appended to
    pub fn new(
        config: LogConfig,
        console: ConsoleSink,
        log_file: Option<&Path>,
    ) -> std::io::Result<Self> {
        let (log_path, file_writer) = match log_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                (Some(path.to_path_buf()), Some(BufWriter::new(file)))
            }
            None => (None, None),
        };

        Ok(Self {
            log_path,
            file_writer: Mutex::new(file_writer),
            console,
            config,
        })
    }

    /// Get the log file path.
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Get the logging configuration.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Log a message at the specified level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.config.level {
            return;
        }
        self.output(message);
    }

    /// Log an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log an error message.
    pub fn error(&self, message: &str) {
        let msg = MessagePrefix::Error.format(message);
        self.log(LogLevel::Error, &msg);
    }

    /// Log a command being executed.
    pub fn command(&self, command: &str) {
        let msg = MessagePrefix::Command.format(command);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a banner line.
    pub fn banner(&self, title: &str) {
        let msg = MessagePrefix::Banner.format(title);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a section marker.
    pub fn section(&self, section_name: &str) {
        let msg = MessagePrefix::Section.format(section_name);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a success message.
    pub fn success(&self, message: &str) {
        let msg = MessagePrefix::Success.format(message);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a pre-rendered multi-line command, one option per line.
    pub fn command_pretty(&self, pretty: &str) {
        self.info("--- ffmpeg options (pretty) ---");
        for line in pretty.lines() {
            self.info(line);
        }
        self.info("-------------------------------");
    }

    /// Log command arguments as JSON.
    pub fn command_json(&self, tokens: &[String]) {
        self.info("--- ffmpeg options (json) ---");
        match serde_json::to_string_pretty(tokens) {
            Ok(json) => self.info(&json),
            Err(e) => tracing::warn!("Failed to serialize ffmpeg options: {}", e),
        }
        self.info("-----------------------------");
    }

    /// Flush the log file.
    pub fn flush(&self) {
        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writer.flush();
        }
    }

    /// Close the logger and release the log file.
    pub fn close(&self) {
        self.flush();
        *self.file_writer.lock() = None;
    }

    /// Format a file line with timestamp (if enabled).
    fn format_file_line(&self, message: &str) -> String {
        if self.config.show_timestamps {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            format!("[{}] {}", timestamp, message)
        } else {
            message.to_string()
        }
    }

    /// Send a message to the console and the log file.
    fn output(&self, message: &str) {
        (self.console)(message);

        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writeln!(writer, "{}", self.format_file_line(message));
        }
    }
}

impl Drop for RunLogger {
    fn drop(&mut self) {
        self.close();
    }
}

/// Builder for creating RunLogger with fluent API.
pub struct RunLoggerBuilder {
    config: LogConfig,
    console: Option<ConsoleSink>,
    log_file: Option<PathBuf>,
}

impl RunLoggerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            console: None,
            log_file: None,
        }
    }

    /// Set the logging configuration.
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the console sink (stdout if never set).
    pub fn console(mut self, console: ConsoleSink) -> Self {
        self.console = Some(console);
        self
    }

    /// Append the log to a file. Empty paths are ignored.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.log_file = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    /// Build the RunLogger.
    pub fn build(self) -> std::io::Result<RunLogger> {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(|line: &str| println!("{}", line)));
        RunLogger::new(self.config, console, self.log_file.as_deref())
    }
}

impl Default for RunLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
