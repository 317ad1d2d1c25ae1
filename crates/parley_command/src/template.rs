//! Template resolution: rewriting delimited spans through the dispatcher.
//!
//! A line such as `Summarize {{file report.txt}}` is rewritten, before
//! being sent to the chat collaborator, into `Summarize <contents of
//! report.txt>`: the span between the configured delimiter pair is
//! dispatched as its own command line and the result spliced back in.
//!
//! Matching is token-level, not character-level: the line is split on
//! whitespace first and delimiters are recognized as token prefixes and
//! suffixes. There is no escape mechanism for literal delimiter text.

use parley_foundation::{Error, Result};

use crate::dispatch::Dispatcher;
use crate::registry::CommandRegistry;

/// Scans a raw line for the registry's delimiter pair, resolves each
/// span through the [`Dispatcher`], and reassembles the line.
///
/// Nested spans resolve inside-out: the content of a closed span is
/// re-run through the resolver before being dispatched, so an inner
/// span's result becomes an argument of the outer command.
pub struct TemplateResolver<'a> {
    registry: &'a CommandRegistry,
    dispatcher: Dispatcher<'a>,
}

impl<'a> TemplateResolver<'a> {
    /// Creates a resolver over the given registry.
    #[must_use]
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self {
            registry,
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// Resolves every delimited span in `line` and returns the
    /// reassembled line. Tokens are rejoined with single spaces.
    ///
    /// A line with no delimiter occurrences comes back unchanged (modulo
    /// whitespace collapsing). An unterminated span is passed through
    /// verbatim rather than failing: the template syntax has no escape
    /// mechanism, so a literal `{{` must remain typeable. A stray end
    /// delimiter outside any span is plain text.
    ///
    /// If the registry has no delimiter pair, the whole line is
    /// dispatched as a single command and its text returned.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` naming the offending span if any span
    /// fails to resolve; the whole line fails rather than being
    /// partially substituted.
    pub fn resolve(&self, line: &str) -> Result<String> {
        let Some((begin, end)) = self.registry.delimiters() else {
            return self.dispatcher.dispatch_text(line);
        };

        // Tokens inside the currently open span. Inner delimiters are
        // kept verbatim so the recursive pass sees them.
        let mut buffer: Vec<&str> = Vec::new();
        // The open span's original tokens, for verbatim pass-through.
        let mut raw: Vec<&str> = Vec::new();
        let mut output: Vec<String> = Vec::new();
        let mut depth = 0usize;

        for token in line.split_whitespace() {
            if depth == 0 {
                match token.strip_prefix(begin) {
                    Some(rest) => {
                        if let Some(inner) = rest.strip_suffix(end) {
                            // Self-contained one-token span, e.g. `{{test}}`.
                            output.push(self.resolve_span(inner, begin, end)?);
                        } else {
                            depth = 1;
                            buffer.clear();
                            raw.clear();
                            raw.push(token);
                            if !rest.is_empty() {
                                buffer.push(rest);
                            }
                        }
                    }
                    None => output.push(token.to_string()),
                }
            } else {
                raw.push(token);
                let opens = token.starts_with(begin);
                let closes = token.ends_with(end);
                if closes && !opens {
                    depth -= 1;
                    if depth == 0 {
                        let lead = token.strip_suffix(end).unwrap_or(token);
                        if !lead.is_empty() {
                            buffer.push(lead);
                        }
                        let span = buffer.join(" ");
                        output.push(self.resolve_span(&span, begin, end)?);
                        buffer.clear();
                        raw.clear();
                    } else {
                        buffer.push(token);
                    }
                } else {
                    if opens && !closes {
                        depth += 1;
                    }
                    // Balanced tokens like `{{inner}}` leave depth alone.
                    buffer.push(token);
                }
            }
        }

        if depth > 0 {
            // Unterminated span: pass the original tokens through.
            output.extend(raw.iter().map(ToString::to_string));
        }

        Ok(output.join(" "))
    }

    /// Resolves one extracted span: expands nested spans recursively,
    /// then dispatches the expansion as a command line.
    fn resolve_span(&self, span: &str, begin: &str, end: &str) -> Result<String> {
        let expand = || -> Result<String> {
            let expanded = self.resolve(span)?;
            self.dispatcher.dispatch_text(&expanded)
        };
        expand().map_err(|e| Error::command_failed(format!("in '{begin}{span}{end}': {e}")))
    }
}
