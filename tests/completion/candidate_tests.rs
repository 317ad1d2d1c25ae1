//! Candidate enumeration against a terminal-shaped command tree.

use parley_command::{Candidate, CommandNode, CommandRegistry, CompletionEngine};
use parley_foundation::Outcome;

/// A registry shaped like the interactive terminal's: marker-prefixed
/// top-level entries, two levels of branches, and a help key.
fn terminal_tree() -> CommandRegistry {
    CommandRegistry::new()
        .with_marker("!")
        .with_command(
            "!clear",
            CommandNode::leaf("Clear the conversation", |_| Ok(Outcome::Silent)),
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
        .with_command(
            "!log",
            CommandNode::branch(
                "Control transcript logging",
                CommandRegistry::new()
                    .with_command("on", CommandNode::leaf("Enable logging", |_| Ok(Outcome::Silent)))
                    .with_command("off", CommandNode::leaf("Disable logging", |_| Ok(Outcome::Silent)))
                    .with_command(
                        "file",
                        CommandNode::with_arg("Log to the given file", "path", |_| {
                            Ok(Outcome::Silent)
                        }),
                    ),
            ),
        )
        .with_command("!exit", CommandNode::leaf("Leave the terminal", |_| Ok(Outcome::Exit)))
        .with_help_key("!help")
}

fn names(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn empty_line_offers_every_top_level_entry() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(
        names(&engine.complete("")),
        vec!["!clear", "!set", "!log", "!exit", "!help"]
    );
}

#[test]
fn marker_alone_offers_every_top_level_entry() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(
        names(&engine.complete("!")),
        vec!["!clear", "!set", "!log", "!exit", "!help"]
    );
}

#[test]
fn prefix_narrows_top_level_candidates() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(names(&engine.complete("!s")), vec!["!set"]);
    assert_eq!(names(&engine.complete("!e")), vec!["!exit"]);
}

#[test]
fn candidates_keep_registration_order() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(names(&engine.complete("!log ")), vec!["on", "off", "file"]);
}

#[test]
fn branch_walk_reaches_second_level() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(names(&engine.complete("!set t")), vec!["target"]);
    assert_eq!(names(&engine.complete("!log o")), vec!["on", "off"]);
}

#[test]
fn leaf_context_is_silently_empty() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert!(engine.complete("!clear ").is_empty());
    assert!(engine.complete("!set target ").is_empty());
}

#[test]
fn unknown_context_is_silently_empty() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert!(engine.complete("!nope anything").is_empty());
}

#[test]
fn no_match_prefix_is_empty_not_error() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert!(engine.complete("!zz").is_empty());
}

#[test]
fn help_key_prefix_completes_the_same_tree() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    assert_eq!(names(&engine.complete("!help set ")), vec!["target", "mode"]);
    // Marker normalization lets the token after the help key stay bare.
    assert_eq!(names(&engine.complete("!help log ")), vec!["on", "off", "file"]);
}

#[test]
fn candidate_carries_help_text() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    let candidates = engine.complete("!se");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].help, "Set value of terminal settings");
}

#[test]
fn mid_word_partial_never_consumes_the_context() {
    let tree = terminal_tree();
    let engine = CompletionEngine::new(&tree);
    // `!set` here is a partial token, not a context step: candidates come
    // from the top level, not from inside the `!set` branch.
    assert_eq!(names(&engine.complete("!set")), vec!["!set"]);
}
