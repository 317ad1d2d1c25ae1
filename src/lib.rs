//! Parley - Interactive chat terminal
//!
//! This crate re-exports all layers of the Parley system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: parley_runtime    - Terminal loop, line editor, transcript, CLI
//! Layer 2: parley_client     - Chat collaborator boundary
//! Layer 1: parley_command    - Command tree, dispatch, templates, completion
//! Layer 0: parley_foundation - Core types (Error, Outcome)
//! ```

pub use parley_client as client;
pub use parley_command as command;
pub use parley_foundation as foundation;
pub use parley_runtime as runtime;
