//! The chat service trait.

use parley_foundation::Result;

/// A conversation target the service can talk to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    /// The name used to select the target.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl Target {
    /// Creates a target.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A chat-sending collaborator keyed by a selected conversation target.
///
/// Everything here is an opaque synchronous operation from the
/// interpreter's point of view: no timeouts, cancellation, or retries are
/// imposed on it. Streaming is an explicit chunk callback rather than a
/// generator, so the caller controls rendering.
pub trait ChatService {
    /// Lists the available conversation targets.
    fn targets(&self) -> Vec<Target>;

    /// Returns the currently selected target name.
    fn target(&self) -> String;

    /// Selects another target by name.
    ///
    /// # Errors
    ///
    /// Returns a `Service` error if the name is unknown.
    fn select_target(&mut self, name: &str) -> Result<()>;

    /// Clears the current conversation.
    ///
    /// # Errors
    ///
    /// Returns a `Service` error if the service cannot reset.
    fn reset_conversation(&mut self) -> Result<()>;

    /// Sends a message and returns the final reply text.
    ///
    /// # Errors
    ///
    /// Returns a `Service` error if sending fails.
    fn send(&mut self, message: &str) -> Result<String>;

    /// Sends a message, delivering the reply incrementally through
    /// `on_chunk`. Chunk boundaries are the service's choice.
    ///
    /// # Errors
    ///
    /// Returns a `Service` error if sending fails.
    fn send_streaming(&mut self, message: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<()>;
}
