//! Error types for the combine flow.
//!
//! Pre-flight problems (missing inputs, closed stdin, unusable tool) are
//! errors. A tool that runs and exits non-zero is not: it is reported as
//! [`RunOutcome::ToolFailed`](crate::models::RunOutcome).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::InputRole;

/// Errors that stop a run before or while launching the external tool.
#[derive(Error, Debug)]
pub enum CombineError {
    /// An input file does not exist (or is not a regular file).
    #[error("{role} file '{}' not found", path.display())]
    MissingInput { role: InputRole, path: PathBuf },

    /// An answer could not be used as a path.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Standard input closed before all answers were read.
    #[error("Input closed before all file names were entered")]
    InputClosed,

    /// Terminal or file I/O failed.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// The encoder could not be located.
    #[error("Required tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    /// The encoder was found but could not be started or waited on.
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}

impl CombineError {
    /// Create a missing input error.
    pub fn missing_input(role: InputRole, path: impl Into<PathBuf>) -> Self {
        Self::MissingInput {
            role,
            path: path.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an I/O error with context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a spawn error.
    pub fn spawn(tool: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            tool: tool.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type for combine operations.
pub type CombineResult<T> = Result<T, CombineError>;
