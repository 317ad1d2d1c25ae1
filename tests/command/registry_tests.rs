//! Registry construction and lookup tests.

use parley_command::{ArgSpec, CommandNode, CommandRegistry};
use parley_foundation::{ErrorKind, Outcome};

fn registry() -> CommandRegistry {
    CommandRegistry::new()
        .with_marker("!")
        .with_command(
            "!clear",
            CommandNode::leaf("Clear the chat", |_| Ok(Outcome::from("cleared"))),
        )
        .with_command(
            "!set",
            CommandNode::branch(
                "Set value of terminal settings",
                CommandRegistry::new().with_command(
                    "mode",
                    CommandNode::with_arg("Switch to another mode", "mode", |_| {
                        Ok(Outcome::Silent)
                    }),
                ),
            ),
        )
        .with_help_key("!help")
}

#[test]
fn lookup_is_case_sensitive() {
    let registry = registry();
    assert!(registry.lookup("!clear").is_ok());
    assert!(registry.lookup("!CLEAR").is_err());
}

#[test]
fn unknown_command_error_names_help_key() {
    let registry = registry();
    let err = registry.lookup("!missing").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("!missing"));
    assert!(msg.contains("!help"));
}

#[test]
fn unknown_command_without_help_key_has_no_remediation() {
    let registry = CommandRegistry::new().with_command("x", CommandNode::note("x"));
    let err = registry.lookup("y").unwrap_err();
    assert!(!format!("{err}").contains("for a list of commands"));
}

#[test]
fn entries_keep_insertion_order() {
    let names: Vec<String> = registry().names().map(String::from).collect();
    assert_eq!(names, ["!clear", "!set", "!help"]);
}

#[test]
fn help_key_entry_is_synthetic_named_arg() {
    let registry = registry();
    let node = registry.get("!help").expect("auto-inserted");
    assert!(!node.is_invocable());
    assert!(matches!(node.args(), ArgSpec::Named(label) if label == "command"));
}

#[test]
fn branch_owns_its_subtree() {
    let registry = registry();
    let node = registry.get("!set").unwrap();
    let ArgSpec::Registry(subtree) = node.args() else {
        panic!("!set should be a branch");
    };
    assert_eq!(subtree.names().collect::<Vec<_>>(), ["mode"]);
    // The subtree carries none of the root configuration.
    assert!(subtree.help_key().is_none());
    assert!(subtree.marker().is_none());
}

#[test]
fn delimiters_and_help_key_are_orthogonal() {
    let neither = CommandRegistry::new();
    assert!(neither.help_key().is_none() && neither.delimiters().is_none());

    let both = CommandRegistry::new()
        .with_delimiters("{{", "}}")
        .with_help_key("help");
    assert_eq!(both.help_key(), Some("help"));
    assert_eq!(both.delimiters(), Some(("{{", "}}")));
}
