//! Error types for the Parley system.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure here is
//! local and recoverable: the terminal prints the message and keeps
//! accepting input.

use thiserror::Error;

/// The main error type for Parley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown command error.
    ///
    /// When `help_key` is set, the message names it as remediation.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>, help_key: Option<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand {
            name: name.into(),
            help_key,
        })
    }

    /// Creates an incomplete command error for the given path walked so far.
    #[must_use]
    pub fn incomplete_command(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompleteCommand { path: path.into() })
    }

    /// Creates a uniform action-failure wrapper.
    #[must_use]
    pub fn command_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandFailed(message.into()))
    }

    /// Creates a no-result error for a line that produced nothing displayable.
    #[must_use]
    pub fn no_result(line: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoResult { line: line.into() })
    }

    /// Creates a chat service error.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Service(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token was not found in the current registry context.
    #[error("unknown command '{name}'{}", remediation(.help_key))]
    UnknownCommand {
        /// The token that failed to resolve.
        name: String,
        /// The registry's help key, if one is configured.
        help_key: Option<String>,
    },

    /// Tokens were exhausted while still descending through branch nodes.
    #[error("incomplete command '{path}' (more tokens required)")]
    IncompleteCommand {
        /// The tokens consumed before the walk stalled.
        path: String,
    },

    /// Uniform wrapper around any action failure.
    #[error("{0}")]
    CommandFailed(String),

    /// A dispatch produced nothing displayable where text was required.
    #[error("no result returned with command '{line}'")]
    NoResult {
        /// The line that was dispatched.
        line: String,
    },

    /// The chat collaborator reported a failure.
    #[error("{0}")]
    Service(String),

    /// Editor or terminal glue failure.
    #[error("internal error: {0}")]
    Internal(String),
}

fn remediation(help_key: &Option<String>) -> String {
    help_key
        .as_ref()
        .map(|key| format!(" (use {key} for a list of commands)"))
        .unwrap_or_default()
}
