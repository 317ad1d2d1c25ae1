//! Span resolution tests.

use std::fs;
use std::path::PathBuf;

use parley_command::{CommandNode, CommandRegistry, TemplateResolver};
use parley_foundation::{Error, Outcome};

fn registry() -> CommandRegistry {
    CommandRegistry::new()
        .with_delimiters("{{", "}}")
        .with_command(
            "test",
            CommandNode::leaf("test command", |_| Ok(Outcome::from("test_placeholder"))),
        )
        .with_command(
            "join",
            CommandNode::with_arg("join the arguments", "args", |args| {
                Ok(Outcome::from(format!("[{}]", args.join("+"))))
            }),
        )
        .with_command(
            "file",
            CommandNode::with_arg("file command", "file", |args| {
                let path = args.first().ok_or_else(|| Error::command_failed("missing path"))?;
                let text = fs::read_to_string(path)
                    .map_err(|e| Error::command_failed(format!("cannot read {path}: {e}")))?;
                Ok(Outcome::Text(text.trim_end().to_string()))
            }),
        )
}

#[test]
fn plain_line_passes_through_unchanged() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("This is a test without placeholders").unwrap(),
        "This is a test without placeholders"
    );
}

#[test]
fn spacing_variants_all_dispatch_the_same_command() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    let expected = "New test_placeholder";
    assert_eq!(resolver.resolve("New {{test}}").unwrap(), expected);
    assert_eq!(resolver.resolve("New {{ test }}").unwrap(), expected);
    assert_eq!(resolver.resolve("New {{test }}").unwrap(), expected);
    assert_eq!(resolver.resolve("New {{ test}}").unwrap(), expected);
}

#[test]
fn span_arguments_are_forwarded() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("x {{join a b c}} y").unwrap(),
        "x [a+b+c] y"
    );
}

#[test]
fn multiple_spans_resolve_left_to_right() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("{{test}} and {{ join 1 2 }}").unwrap(),
        "test_placeholder and [1+2]"
    );
}

#[test]
fn nested_span_feeds_outer_command() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    assert_eq!(
        resolver.resolve("{{ join outer {{ test }} }}").unwrap(),
        "[outer+test_placeholder]"
    );
}

#[test]
fn file_span_splices_contents() {
    let path = temp_file("resolution", "hello");
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    let line = format!("Hi {{{{file {}}}}}", path.display());
    assert_eq!(resolver.resolve(&line).unwrap(), "Hi hello");
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_fails_the_whole_line() {
    let registry = registry();
    let resolver = TemplateResolver::new(&registry);
    let err = resolver.resolve("Hi {{file /no/such/file.txt}}").unwrap_err();
    assert!(format!("{err}").contains("/no/such/file.txt"));
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("parley_template_{name}_{}.txt", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}
