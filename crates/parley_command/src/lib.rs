//! The Parley line interpreter.
//!
//! This crate is the algorithmic core of the terminal. It resolves a raw
//! input line into either a structured command invocation from a
//! hierarchical command tree, or a text line with embedded (possibly
//! nested) placeholder expressions resolved through the same tree:
//!
//! - [`CommandNode`] / [`ArgSpec`] - A leaf or branch in the command tree
//! - [`CommandRegistry`] - An ordered mapping of names to nodes, with
//!   optional help key, delimiter pair, and command marker
//! - [`Dispatcher`] - Walks a tokenized line to the deepest invocable node
//! - [`TemplateResolver`] - Rewrites `{{...}}` spans through the dispatcher
//! - [`CompletionEngine`] - Enumerates valid next tokens for a partial line
//!
//! The tree is constructed once at startup and read-only thereafter;
//! everything here is synchronous and single-threaded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod complete;
mod dispatch;
mod node;
mod registry;
mod template;

pub use complete::{Candidate, CompletionEngine};
pub use dispatch::Dispatcher;
pub use node::{Action, ArgSpec, CommandNode};
pub use registry::CommandRegistry;
pub use template::TemplateResolver;
