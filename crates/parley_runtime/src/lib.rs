//! Terminal runtime for Parley.
//!
//! Everything here is thin I/O glue around the `parley_command` core:
//! the [`LineEditor`] abstraction and its rustyline implementation, the
//! [`Session`] settings, the [`Transcript`] log file, and the
//! [`Terminal`] read-eval-print loop talking to a
//! [`parley_client::ChatService`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod session;
mod terminal;
mod transcript;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use session::{Mode, Session};
pub use terminal::{Reply, Terminal};
pub use transcript::Transcript;
