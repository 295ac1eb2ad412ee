//! avcombine core - backend logic for combining a video and an audio file
//!
//! This crate contains all behavior with no terminal assumptions.
//! The binary wires stdin/stdout into [`combiner::Combiner`].

pub mod combiner;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod mux;
pub mod prompt;
pub mod runner;
pub mod validation;

pub use combiner::Combiner;
pub use errors::{CombineError, CombineResult};
pub use models::{InputRole, MuxRequest, RunOutcome};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
