//! The chat collaborator boundary.
//!
//! The terminal core treats the remote chat service as an external
//! collaborator behind the [`ChatService`] trait: send a line, get final
//! text back, or get incremental text chunks through a callback. Real
//! transports plug in at this seam; [`EchoService`] is the deterministic
//! in-process implementation the binary and tests use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod echo;
mod service;

pub use echo::EchoService;
pub use service::{ChatService, Target};
