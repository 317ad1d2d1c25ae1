//! Help rendering tests.

use parley_command::{CommandNode, CommandRegistry};
use parley_foundation::Outcome;

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
                CommandRegistry::new()
                    .with_command(
                        "target",
                        CommandNode::with_arg("Switch to another target", "target", |_| {
                            Ok(Outcome::Silent)
                        }),
                    )
                    .with_command(
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
fn root_help_lists_every_entry_once_in_order() {
    let help = registry().render_help(&[]).unwrap();
    let lines: Vec<&str> = help.lines().collect();
    assert_eq!(
        lines,
        [
            "!clear - Clear the chat",
            "!set <target|mode> - Set value of terminal settings",
            "!help <command> - Show this message",
        ]
    );
}

#[test]
fn branch_help_renders_children_with_arg_hints() {
    let help = registry().render_help(&["!set"]).unwrap();
    let lines: Vec<&str> = help.lines().collect();
    assert_eq!(
        lines,
        [
            "!set target <target> - Switch to another target",
            "!set mode <mode> - Switch to another mode",
        ]
    );
}

#[test]
fn bare_path_gets_the_marker_prefixed() {
    let registry = registry();
    assert_eq!(
        registry.render_help(&["set"]).unwrap(),
        registry.render_help(&["!set"]).unwrap()
    );
}

#[test]
fn descent_stops_at_named_arg_node() {
    // "target" takes a free-form argument; the walk stops there and the
    // containing registry is rendered under the full path.
    let help = registry().render_help(&["set", "target"]).unwrap();
    assert!(help.starts_with("!set target target <target>"));
}

#[test]
fn overlong_path_is_not_an_error() {
    // Tokens past the first non-branch node just stop the walk.
    assert!(registry().render_help(&["set", "mode", "extra", "junk"]).is_ok());
}

#[test]
fn unknown_path_token_is_an_error() {
    assert!(registry().render_help(&["nonsense"]).is_err());
}
