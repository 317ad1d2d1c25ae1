//! Line editor abstraction for the terminal.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the terminal to use rustyline while remaining
//! swappable (and mockable in tests).

use std::borrow::Cow;
use std::rc::Rc;

use parley_command::{CommandRegistry, CompletionEngine};
use parley_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer as RLCompleter, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Wire the command tree used for tab completion.
    fn set_commands(&mut self, commands: Rc<CommandRegistry>);
}

/// Helper for rustyline that provides completion, hints, and prompt
/// highlighting.
#[derive(Helper, RLCompleter, Hinter, RLValidator)]
struct ParleyHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: AcceptAll,
}

impl Highlighter for ParleyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Every line is complete as typed; multi-line input is out of scope.
#[derive(Default)]
struct AcceptAll;

impl Validator for AcceptAll {}

/// Completer bridging rustyline to the [`CompletionEngine`].
///
/// Only lines starting with the registry's command marker are completed;
/// plain chat text gets no candidates.
struct CommandCompleter {
    commands: Option<Rc<CommandRegistry>>,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some(commands) = &self.commands else {
            return Ok((0, Vec::new()));
        };
        let Some(marker) = commands.marker() else {
            return Ok((0, Vec::new()));
        };
        if !line.starts_with(marker) {
            return Ok((0, Vec::new()));
        }

        let typed = &line[..pos];
        let start = typed
            .rfind(|c: char| c.is_whitespace())
            .map_or(0, |i| i + 1);

        let candidates: Vec<Pair> = CompletionEngine::new(commands)
            .complete(typed)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.name.clone(),
                replacement: candidate.name,
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ParleyHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = ParleyHelper {
            completer: CommandCompleter { commands: None },
            hinter: HistoryHinter::new(),
            validator: AcceptAll,
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_commands(&mut self, commands: Rc<CommandRegistry>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.commands = Some(commands);
        }
    }
}
