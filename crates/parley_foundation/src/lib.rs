//! Core types shared by every Parley layer.
//!
//! This crate provides:
//! - [`Error`] / [`ErrorKind`] - Recoverable failures surfaced to the terminal
//! - [`Result`] - The crate-wide result alias
//! - [`Outcome`] - The value a command action returns

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod outcome;

pub use error::{Error, ErrorKind};
pub use outcome::Outcome;

/// The result type used throughout Parley.
pub type Result<T> = std::result::Result<T, Error>;
