//! Incremental completion of partial command paths.

use crate::node::{ArgSpec, CommandNode};
use crate::registry::CommandRegistry;

/// One completion candidate: an entry name plus its help text for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The entry name that would complete the partial token.
    pub name: String,
    /// The entry's help text.
    pub help: String,
}

/// Replays the dispatcher's descent against a partial line to enumerate
/// valid next-token candidates.
///
/// Read-only traversal: the engine never invokes an action, so it is safe
/// to run while dispatch is idle.
pub struct CompletionEngine<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> CompletionEngine<'a> {
    /// Creates a completion engine over the given registry.
    #[must_use]
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Enumerates candidates for the line typed so far.
    ///
    /// A line ending in whitespace starts a new (empty) partial token.
    /// A leading help-key token is stripped, and the marker normalization
    /// used by help rendering is re-applied to the first context token.
    /// The walk follows branch links only; the trailing partial token
    /// never participates in context selection. Lookup failure or a
    /// non-branch context yields no candidates - silently empty, never
    /// an error.
    #[must_use]
    pub fn complete(&self, line: &str) -> Vec<Candidate> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let new_token = line.is_empty() || line.ends_with(char::is_whitespace);
        let (context_tokens, partial) = if new_token {
            (&tokens[..], "")
        } else {
            let (last, rest) = tokens.split_last().map_or(("", &tokens[..]), |(l, r)| (*l, r));
            (rest, last)
        };

        let mut context_tokens: Vec<String> =
            context_tokens.iter().map(ToString::to_string).collect();
        if let (Some(help_key), Some(first)) = (self.registry.help_key(), context_tokens.first()) {
            if first == help_key {
                context_tokens.remove(0);
            }
        }
        if let (Some(marker), Some(first)) = (self.registry.marker(), context_tokens.first_mut()) {
            if !first.starts_with(marker) {
                *first = format!("{marker}{first}");
            }
        }

        let mut context = self.registry;
        for token in &context_tokens {
            match context.get(token).map(CommandNode::args) {
                Some(ArgSpec::Registry(registry)) => context = registry,
                Some(ArgSpec::None | ArgSpec::Named(_)) | None => return Vec::new(),
            }
        }

        context
            .iter()
            .filter(|(name, _)| name.starts_with(partial))
            .map(|(name, node)| Candidate {
                name: name.to_string(),
                help: node.help().to_string(),
            })
            .collect()
    }
}
