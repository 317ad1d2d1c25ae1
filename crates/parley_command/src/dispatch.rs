//! Dispatch: walking a tokenized line against the command tree.

use parley_foundation::{Error, Outcome, Result};

use crate::node::ArgSpec;
use crate::registry::CommandRegistry;

/// Walks an input line against a [`CommandRegistry`], descending through
/// nested registries until an invocable node is found, then invokes it
/// with the remaining tokens.
///
/// Exactly one attempt per resolution: the dispatcher never retries and
/// never sequences an action's side effects.
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over the given registry.
    #[must_use]
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Resolves and invokes the line's deepest matching command.
    ///
    /// The line is split on whitespace. If the registry reserves a help
    /// key and the first token equals it, the remaining tokens are
    /// delegated to help rendering. Otherwise the walk descends through
    /// branch nodes; the first invocable node is invoked with the tokens
    /// after it and exactly once.
    ///
    /// # Errors
    ///
    /// - `UnknownCommand` if a token is not found in its context
    /// - `IncompleteCommand` if tokens run out while still descending,
    ///   or the walk reaches a documentation-only entry
    /// - `CommandFailed` if the invoked action fails
    pub fn dispatch(&self, line: &str) -> Result<Outcome> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(Error::incomplete_command(""));
        }

        if let Some(help_key) = self.registry.help_key() {
            if tokens[0] == help_key {
                return self.registry.render_help(&tokens[1..]).map(Outcome::Text);
            }
        }

        let mut context = self.registry;
        for (i, token) in tokens.iter().enumerate() {
            let node = context.lookup(token)?;
            if node.is_invocable() {
                let args: Vec<String> = tokens[i + 1..].iter().map(ToString::to_string).collect();
                return node.invoke(&args);
            }
            match node.args() {
                ArgSpec::Registry(registry) => context = registry,
                ArgSpec::None | ArgSpec::Named(_) => {
                    return Err(Error::incomplete_command(tokens[..=i].join(" ")));
                }
            }
        }

        Err(Error::incomplete_command(tokens.join(" ")))
    }

    /// Dispatches the line and coerces the outcome to display text.
    ///
    /// This is the entry point template resolution uses: a span must
    /// produce a substitution string.
    ///
    /// # Errors
    ///
    /// As [`Self::dispatch`], plus `NoResult` if the outcome carries no
    /// displayable text.
    pub fn dispatch_text(&self, line: &str) -> Result<String> {
        match self.dispatch(line)? {
            Outcome::Text(text) => Ok(text),
            Outcome::Silent | Outcome::Exit => Err(Error::no_result(line.trim())),
        }
    }
}
