//! Transcript logging for the terminal.
//!
//! A line-oriented log of what the interpreter dispatched and what the
//! chat service replied. Owned explicitly by the terminal and shared with
//! the `!log` commands - there is no process-wide logger instance.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use parley_foundation::{Error, Result};

/// Default transcript path used by `!log on` when no file was chosen.
pub const DEFAULT_PATH: &str = "parley.log";

/// An optional, toggleable transcript file.
///
/// Entries are timestamped with nanoseconds since the transcript was
/// created. Write failures are swallowed: logging must never take down
/// the input loop.
pub struct Transcript {
    file: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    active: bool,
    started: Instant,
}

impl Transcript {
    /// Creates an inactive transcript with no file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: None,
            path: None,
            active: false,
            started: Instant::now(),
        }
    }

    /// Points the transcript at `path`, replacing any open file.
    ///
    /// # Errors
    ///
    /// Returns a `CommandFailed` error if the file cannot be created.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| Error::command_failed(format!("cannot open {}: {e}", path.display())))?;
        self.file = Some(BufWriter::new(file));
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Turns logging on or off. Turning it on opens the default path if
    /// no file was chosen yet.
    ///
    /// # Errors
    ///
    /// Returns a `CommandFailed` error if the default file cannot be
    /// created.
    pub fn set_active(&mut self, active: bool) -> Result<()> {
        if active && self.file.is_none() {
            self.open(Path::new(DEFAULT_PATH))?;
        }
        self.active = active;
        Ok(())
    }

    /// Whether logging is currently on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current transcript path, if a file was opened.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends one entry. No-op when inactive.
    pub fn log(&mut self, origin: &str, message: &str) {
        if !self.active {
            return;
        }
        if let Some(file) = &mut self.file {
            let elapsed_ns = self.started.elapsed().as_nanos();
            let _ = writeln!(file, "[{elapsed_ns}] <{origin}> {message}");
            let _ = file.flush();
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
