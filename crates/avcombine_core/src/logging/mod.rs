//! Logging infrastructure for avcombine.
//!
//! This module provides:
//! - A per-run logger for user-facing console lines, optionally mirrored to a file
//! - Integration with the `tracing` ecosystem for diagnostics on stderr
//!
//! # Example
//!
//! ```no_run
//! use avcombine_core::logging::{LogConfig, RunLoggerBuilder};
//!
//! let logger = RunLoggerBuilder::new()
//!     .config(LogConfig::default())
//!     .log_file("avcombine.log")
//!     .build()
//!     .unwrap();
//!
//! logger.banner("Video + Audio Combiner");
//! logger.command("ffmpeg -i clip.mp4 -i track.wav ...");
//! logger.success("Successfully created: final.mp4");
//! ```

mod run_logger;
mod types;

pub use run_logger::{RunLogger, RunLoggerBuilder};
pub use types::{ConsoleSink, LogConfig, LogLevel, MessagePrefix};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for diagnostics.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr, keeping stdout for the run's own messages
///
/// Should be called once at startup. A second call is a no-op.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .try_init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Warn), "warn");
    }
}
