//! Unbalanced and degenerate delimiter handling.
//!
//! Policy under test: an unterminated span passes through verbatim, a
//! stray end delimiter is plain text, and a failing span fails the whole
//! line without partial substitution.

use parley_command::{CommandNode, CommandRegistry, TemplateResolver};
use parley_foundation::{ErrorKind, Outcome};

fn registry() -> CommandRegistry {
    CommandRegistry::new()
        .with_delimiters("{{", "}}")
        .with_command(
            "test",
            CommandNode::leaf("test command", |_| Ok(Outcome::from("test_placeholder"))),
        )
}

#[test]
fn unterminated_span_is_passed_through() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("before {{ test never closes").unwrap(),
        "before {{ test never closes"
    );
}

#[test]
fn unterminated_single_token_span_is_passed_through() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(resolver.resolve("just {{test").unwrap(), "just {{test");
}

#[test]
fn stray_end_delimiter_is_plain_text() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(resolver.resolve("a }} b").unwrap(), "a }} b");
}

#[test]
fn resolved_span_before_unterminated_one_still_resolves() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("{{test}} then {{ dangling").unwrap(),
        "test_placeholder then {{ dangling"
    );
}

#[test]
fn failing_span_does_not_partially_substitute() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    let err = resolver.resolve("{{test}} and {{ bogus }}").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CommandFailed(_)));
}

#[test]
fn failure_message_names_the_span() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    let err = resolver.resolve("{{ bogus }}").unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("{{bogus}}"), "message was: {msg}");
    assert!(msg.contains("unknown command"));
}

#[test]
fn whitespace_is_collapsed_on_reassembly() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(resolver.resolve("a    b\t c").unwrap(), "a b c");
}
