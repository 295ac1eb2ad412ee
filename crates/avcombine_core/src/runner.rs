//! Command runner for external process execution.
//!
//! The encoder inherits the terminal, so its own progress and diagnostics
//! reach the user directly. Nothing is captured or parsed; only the exit
//! status comes back.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::{CombineError, CombineResult};

/// Exit status of a finished process.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusCode {
    pub code: Option<i32>,
}

impl ExitStatusCode {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one external program to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    fn run(&self, program: &str, args: &[String]) -> CombineResult<ExitStatusCode>;
}

/// Runner that spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CombineResult<ExitStatusCode> {
        let resolved = resolve_program(program)?;

        tracing::debug!("Running: {} {}", resolved.display(), args.join(" "));

        let status = Command::new(&resolved)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CombineError::tool_not_found(program),
                _ => CombineError::spawn(program, e),
            })?;

        tracing::debug!("{} exited with {:?}", program, status.code());

        Ok(ExitStatusCode {
            code: status.code(),
        })
    }
}

/// Resolve a program name or path to an executable.
///
/// Anything containing a path separator is used as given; bare names are
/// looked up on `PATH`.
pub fn resolve_program(program: &str) -> CombineResult<PathBuf> {
    if program.trim().is_empty() {
        return Err(CombineError::tool_not_found(program));
    }

    let as_path = Path::new(program);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        if as_path.is_file() {
            return Ok(as_path.to_path_buf());
        }
        return Err(CombineError::tool_not_found(program));
    }

    which::which(program).map_err(|e| {
        tracing::debug!("PATH lookup for {} failed: {}", program, e);
        CombineError::tool_not_found(program)
    })
}
