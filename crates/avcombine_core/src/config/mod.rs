//! Configuration for avcombine.
//!
//! This module provides:
//! - TOML-based settings with logical sections
//! - Defaults for every missing section and key
//!
//! # Example
//!
//! ```no_run
//! use avcombine_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/avcombine.toml");
//! config.load_or_default().unwrap();
//!
//! println!("Encoder: {}", config.settings().tools.ffmpeg);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, Settings, ToolSettings};
