//! Session state for the terminal.

use std::fmt;
use std::str::FromStr;

use parley_foundation::Error;

/// How chat replies are delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stream reply chunks as they arrive.
    #[default]
    Interactive,
    /// Print the final reply text in one piece.
    Batch,
}

impl Mode {
    /// Every mode, in listing order.
    pub const ALL: [Self; 2] = [Self::Interactive, Self::Batch];

    /// Human-readable description for `!list mode`.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Interactive => "Interactive mode",
            Self::Batch => "Batch mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Batch => write!(f, "batch"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interactive" => Ok(Self::Interactive),
            "batch" => Ok(Self::Batch),
            other => Err(Error::command_failed(format!("invalid mode '{other}'"))),
        }
    }
}

/// Mutable settings for one terminal session.
///
/// Owned by the terminal and shared with command closures; the command
/// tree itself stays immutable.
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
}

impl Session {
    /// Creates a session with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Renders one line per mode for `!list mode`.
    #[must_use]
    pub fn describe_modes() -> String {
        Mode::ALL
            .iter()
            .map(|mode| format!("{mode} - {}", mode.describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
