//! Line-oriented interactive input.
//!
//! Answers are read one byte at a time so nothing past the last newline is
//! consumed. ffmpeg inherits the same stdin and may ask its own questions
//! (e.g. whether to overwrite the output), so any remaining input is left
//! for it.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::errors::{CombineError, CombineResult};

/// Asks questions on a writer and reads answers from a reader.
///
/// The reader should not buffer ahead; use [`unbuffered_stdin`] for the
/// terminal rather than a locked `Stdin`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label`, then read one line and return it trimmed.
    ///
    /// End of input before any byte is read is an error.
    pub fn ask(&mut self, label: &str) -> CombineResult<String> {
        write!(self.output, "{}", label).map_err(|e| CombineError::io_error("writing prompt", e))?;
        self.output
            .flush()
            .map_err(|e| CombineError::io_error("writing prompt", e))?;

        let line = self
            .read_line()
            .map_err(|e| CombineError::io_error("reading answer", e))?
            .ok_or(CombineError::InputClosed)?;

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Read up to and including the next `\n`, without reading past it.
    ///
    /// Returns `None` at end of input with nothing read.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match self.input.read(&mut byte) {
                Ok(0) if line.is_empty() => return Ok(None),
                Ok(0) => break,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => line.push(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Some(line))
    }
}

/// An unbuffered handle on the process's standard input.
///
/// `Stdin` reads ahead into its own buffer; this duplicates the underlying
/// descriptor so each `read` goes straight to the OS.
#[cfg(unix)]
pub fn unbuffered_stdin() -> io::Result<File> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

/// An unbuffered handle on the process's standard input.
#[cfg(windows)]
pub fn unbuffered_stdin() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    let handle = io::stdin().as_handle().try_clone_to_owned()?;
    Ok(File::from(handle))
}
