//! Command tree nodes.

use std::fmt;

use parley_foundation::{Error, ErrorKind, Outcome, Result};

use crate::registry::CommandRegistry;

/// A command action: an ordered sequence of argument tokens in, an
/// [`Outcome`] out. Closures capture whatever application state they need.
pub type Action = Box<dyn Fn(&[String]) -> Result<Outcome>>;

/// The argument shape of a command node.
///
/// An explicit tagged variant: a node either takes no arguments, documents
/// one free-form textual argument (not validated), or is a branch whose
/// further tokens select within a nested registry.
pub enum ArgSpec {
    /// The command takes no arguments.
    None,

    /// One free-form textual argument, named for help rendering only.
    Named(String),

    /// Further tokens select within this nested registry. The registry is
    /// owned exclusively by this node: the tree is strict, with no sharing
    /// and no cycles.
    Registry(CommandRegistry),
}

impl fmt::Debug for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Named(label) => write!(f, "Named({label:?})"),
            Self::Registry(registry) => {
                write!(f, "Registry({} entries)", registry.len())
            }
        }
    }
}

/// A leaf or branch in the command tree.
///
/// The invariant that an invocable node never doubles as a branch (and
/// vice versa) is enforced by construction: fields are private and every
/// constructor produces a valid combination, so it cannot be violated at
/// dispatch time.
pub struct CommandNode {
    /// The action to invoke, or `None` for branches and documentation
    /// entries.
    action: Option<Action>,

    /// Human-readable one-line description.
    help: String,

    /// The argument shape.
    args: ArgSpec,
}

impl CommandNode {
    /// Creates an invocable node that takes no arguments.
    pub fn leaf(
        help: impl Into<String>,
        action: impl Fn(&[String]) -> Result<Outcome> + 'static,
    ) -> Self {
        Self {
            action: Some(Box::new(action)),
            help: help.into(),
            args: ArgSpec::None,
        }
    }

    /// Creates an invocable node with one named free-form argument.
    ///
    /// The label is documentation for help rendering; the argument is not
    /// validated.
    pub fn with_arg(
        help: impl Into<String>,
        label: impl Into<String>,
        action: impl Fn(&[String]) -> Result<Outcome> + 'static,
    ) -> Self {
        Self {
            action: Some(Box::new(action)),
            help: help.into(),
            args: ArgSpec::Named(label.into()),
        }
    }

    /// Creates a branch node: further tokens select within `registry`.
    pub fn branch(help: impl Into<String>, registry: CommandRegistry) -> Self {
        Self {
            action: None,
            help: help.into(),
            args: ArgSpec::Registry(registry),
        }
    }

    /// Creates an action-less documentation entry.
    ///
    /// Useful for enumerating candidate values in help and completion.
    /// Dispatching into one fails with `IncompleteCommand`.
    pub fn note(help: impl Into<String>) -> Self {
        Self {
            action: None,
            help: help.into(),
            args: ArgSpec::None,
        }
    }

    /// The synthetic entry auto-inserted for a registry's help key.
    pub(crate) fn help_entry() -> Self {
        Self {
            action: None,
            help: "Show this message".to_string(),
            args: ArgSpec::Named("command".to_string()),
        }
    }

    /// Returns the help text.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Returns the argument shape.
    #[must_use]
    pub fn args(&self) -> &ArgSpec {
        &self.args
    }

    /// Whether this node carries an action.
    #[must_use]
    pub fn is_invocable(&self) -> bool {
        self.action.is_some()
    }

    /// Renders the argument hint for help lines: empty for no arguments,
    /// `<label>` for a named argument, `<name1|name2|...>` for a branch.
    #[must_use]
    pub fn arg_hint(&self) -> String {
        match &self.args {
            ArgSpec::None => String::new(),
            ArgSpec::Named(label) => format!("<{label}>"),
            ArgSpec::Registry(registry) => {
                let names: Vec<&str> = registry.names().collect();
                format!("<{}>", names.join("|"))
            }
        }
    }

    /// Invokes this node's action with the given arguments.
    ///
    /// Any failure raised by the action is re-raised as a uniform
    /// `CommandFailed` carrying the action's message, so callers never
    /// need to distinguish origin.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` if the action fails, or an internal error
    /// if the node has no action (callers check [`Self::is_invocable`]).
    pub fn invoke(&self, args: &[String]) -> Result<Outcome> {
        let Some(action) = &self.action else {
            return Err(Error::internal("invoke on a non-invocable node"));
        };
        action(args).map_err(|e| match e.kind {
            ErrorKind::CommandFailed(_) => e,
            other => Error::command_failed(other.to_string()),
        })
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("action", &self.action.as_ref().map(|_| "..."))
            .field("help", &self.help)
            .field("args", &self.args)
            .finish()
    }
}
