//! The command registry: an ordered mapping of names to nodes.

use std::fmt;

use parley_foundation::{Error, Result};

use crate::node::{ArgSpec, CommandNode};

/// An insertion-ordered mapping of command names to [`CommandNode`]s.
///
/// A registry may carry a reserved help key (which triggers tree-walking
/// help rendering instead of normal dispatch), a begin/end delimiter pair
/// (enabling template resolution for lines processed through it), and a
/// command marker (the `!` prefix used in help and completion
/// normalization). The three are orthogonal: a registry may have any
/// combination.
///
/// Registries are built once at startup and read-only thereafter.
#[derive(Default)]
pub struct CommandRegistry {
    /// Name/node pairs in insertion order. Trees are small, so lookup is
    /// a linear scan.
    entries: Vec<(String, CommandNode)>,

    /// Reserved name that triggers help rendering.
    help_key: Option<String>,

    /// Begin/end delimiter pair for template resolution.
    delimiters: Option<(String, String)>,

    /// Prefix identifying a token as a top-level command.
    marker: Option<String>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already registered. Registries are
    /// wired by hand at startup, so either is a programming error.
    #[must_use]
    pub fn with_command(mut self, name: impl Into<String>, node: CommandNode) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "command name must not be empty");
        assert!(
            !self.entries.iter().any(|(existing, _)| *existing == name),
            "duplicate command name '{name}'"
        );
        self.entries.push((name, node));
        self
    }

    /// Reserves `key` as the help command and auto-inserts a synthetic
    /// entry for it (so it shows up in help and completion).
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty or already registered.
    #[must_use]
    pub fn with_help_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut registry = self.with_command(key.clone(), CommandNode::help_entry());
        registry.help_key = Some(key);
        registry
    }

    /// Enables template resolution with the given delimiter pair.
    #[must_use]
    pub fn with_delimiters(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiters = Some((begin.into(), end.into()));
        self
    }

    /// Sets the command marker (e.g. `!`).
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Returns the help key, if one is reserved.
    #[must_use]
    pub fn help_key(&self) -> Option<&str> {
        self.help_key.as_deref()
    }

    /// Returns the delimiter pair, if configured.
    #[must_use]
    pub fn delimiters(&self) -> Option<(&str, &str)> {
        self.delimiters
            .as_ref()
            .map(|(begin, end)| (begin.as_str(), end.as_str()))
    }

    /// Returns the command marker, if configured.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Looks up a node by name, failing with `UnknownCommand`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if `name` is not registered; when a help
    /// key is reserved the message names it as remediation.
    pub fn lookup(&self, name: &str) -> Result<&CommandNode> {
        self.get(name)
            .ok_or_else(|| Error::unknown_command(name, self.help_key.clone()))
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Iterates entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders help for the registry reached by descending through `path`.
    ///
    /// If the path's first token lacks the command marker it is prefixed,
    /// so `help foo` and `!help foo` render identically. Descent follows
    /// branch nodes and stops at the first non-branch node or when the
    /// path is exhausted (exhaustion is not an error). One line is
    /// rendered per entry, in insertion order:
    /// `<path> <name> <argHint> - <helpText>`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if a path token is not registered in the
    /// context it is matched against.
    pub fn render_help(&self, path: &[&str]) -> Result<String> {
        let mut tokens: Vec<String> = path.iter().map(ToString::to_string).collect();
        if let (Some(marker), Some(first)) = (&self.marker, tokens.first_mut()) {
            if !first.starts_with(marker.as_str()) {
                *first = format!("{marker}{first}");
            }
        }

        let mut context = self;
        for token in &tokens {
            let node = context.lookup(token)?;
            match node.args() {
                ArgSpec::Registry(registry) => context = registry,
                ArgSpec::None | ArgSpec::Named(_) => break,
            }
        }

        let prefix = tokens.join(" ");
        let lines: Vec<String> = context
            .iter()
            .map(|(name, node)| {
                let mut parts = Vec::new();
                if !prefix.is_empty() {
                    parts.push(prefix.clone());
                }
                parts.push(name.to_string());
                let hint = node.arg_hint();
                if !hint.is_empty() {
                    parts.push(hint);
                }
                format!("{} - {}", parts.join(" "), node.help())
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("entries", &self.names().collect::<Vec<_>>())
            .field("help_key", &self.help_key)
            .field("delimiters", &self.delimiters)
            .field("marker", &self.marker)
            .finish()
    }
}
