//! The interactive terminal loop.
//!
//! One line is fully resolved (template expansion, then dispatch or send)
//! before the next is accepted. A line starting with the command marker
//! goes straight to the dispatcher; everything else is template-expanded
//! and sent to the chat service.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use parley_client::ChatService;
use parley_command::{CommandNode, CommandRegistry, Dispatcher, TemplateResolver};
use parley_foundation::{Error, Outcome, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Mode, Session};
use crate::transcript::Transcript;

/// What one input line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Output text from a dispatched command.
    Command(String),
    /// The chat service's full reply text.
    Chat(String),
    /// The reply was already echoed chunk by chunk to stdout.
    Streamed,
    /// The line produced nothing to display.
    Silent,
    /// The terminal should stop.
    Exit,
}

/// The interactive chat terminal.
pub struct Terminal<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The chat collaborator.
    service: Rc<RefCell<dyn ChatService>>,

    /// Session settings shared with the command closures.
    session: Rc<RefCell<Session>>,

    /// Transcript log shared with the `!log` commands.
    transcript: Rc<RefCell<Transcript>>,

    /// Top-level command tree (marker `!`, help key `!help`). Shared with
    /// the editor for tab completion.
    commands: Rc<CommandRegistry>,

    /// Template command tree (delimiters `{{` / `}}`).
    templates: CommandRegistry,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether interactive-mode chunks are echoed to stdout as they
    /// arrive.
    live_output: bool,

    /// Primary prompt.
    prompt: String,
}

impl Terminal<RustylineEditor> {
    /// Creates a terminal with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(service: Rc<RefCell<dyn ChatService>>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, service))
    }
}

impl<E: LineEditor> Terminal<E> {
    /// Creates a terminal with the given editor.
    pub fn with_editor(mut editor: E, service: Rc<RefCell<dyn ChatService>>) -> Self {
        let session = Rc::new(RefCell::new(Session::new()));
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        let commands = Rc::new(build_commands(&service, &session, &transcript));
        let templates = build_templates(&service);
        editor.set_commands(Rc::clone(&commands));

        Self {
            editor,
            service,
            session,
            transcript,
            commands,
            templates,
            show_banner: true,
            live_output: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Collects interactive replies instead of echoing chunks to stdout.
    #[must_use]
    pub fn without_live_output(mut self) -> Self {
        self.live_output = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a handle to the session settings.
    #[must_use]
    pub fn session(&self) -> Rc<RefCell<Session>> {
        Rc::clone(&self.session)
    }

    /// Returns a handle to the transcript.
    #[must_use]
    pub fn transcript(&self) -> Rc<RefCell<Transcript>> {
        Rc::clone(&self.transcript)
    }

    /// Returns a handle to the chat service.
    #[must_use]
    pub fn service(&self) -> Rc<RefCell<dyn ChatService>> {
        Rc::clone(&self.service)
    }

    /// Runs the terminal loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Command and chat
    /// failures are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let prompt = self.prompt.clone();
        match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return Ok(true);
                }
                self.editor.add_history(trimmed);

                match self.eval_line(trimmed) {
                    Ok(Reply::Command(text) | Reply::Chat(text)) => println!("{text}"),
                    Ok(Reply::Streamed) => println!(),
                    Ok(Reply::Silent) => {}
                    Ok(Reply::Exit) => return Ok(false),
                    Err(e) => self.print_error(&e),
                }
                Ok(true)
            }
            ReadResult::Interrupted => {
                println!("\nInput cancelled.");
                Ok(true)
            }
            ReadResult::Eof => Ok(false),
        }
    }

    /// Resolves one input line.
    ///
    /// # Errors
    ///
    /// Returns the dispatch or resolution failure; all are recoverable
    /// and the caller is expected to display them and keep going.
    pub fn eval_line(&mut self, line: &str) -> Result<Reply> {
        if self.is_command(line) {
            self.transcript.borrow_mut().log("dispatch", line);
            return match Dispatcher::new(&self.commands).dispatch(line)? {
                Outcome::Text(text) => Ok(Reply::Command(text)),
                Outcome::Silent => Ok(Reply::Silent),
                Outcome::Exit => Ok(Reply::Exit),
            };
        }

        let expanded = TemplateResolver::new(&self.templates).resolve(line)?;
        self.transcript.borrow_mut().log("send", &expanded);

        let mode = self.session.borrow().mode();
        let streamed = self.live_output && mode == Mode::Interactive;
        let reply = match mode {
            Mode::Interactive => {
                let mut buffer = String::new();
                let echo = self.live_output;
                self.service
                    .borrow_mut()
                    .send_streaming(&expanded, &mut |chunk| {
                        if echo {
                            print!("{chunk}");
                            let _ = io::stdout().flush();
                        }
                        buffer.push_str(chunk);
                    })?;
                buffer
            }
            Mode::Batch => self.service.borrow_mut().send(&expanded)?,
        };
        self.transcript.borrow_mut().log("reply", &reply);

        if streamed {
            Ok(Reply::Streamed)
        } else {
            Ok(Reply::Chat(reply))
        }
    }

    fn is_command(&self, line: &str) -> bool {
        self.commands
            .marker()
            .is_some_and(|marker| line.starts_with(marker))
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31m{error}\x1b[0m");
    }

    fn print_banner(&self) {
        println!(
            "Parley v{} - type a message, or {} for commands. Ctrl+D exits.",
            env!("CARGO_PKG_VERSION"),
            self.commands.help_key().unwrap_or("!help"),
        );
        let _ = io::stdout().flush();
    }
}

/// Builds the top-level command tree wired to the shared state.
fn build_commands(
    service: &Rc<RefCell<dyn ChatService>>,
    session: &Rc<RefCell<Session>>,
    transcript: &Rc<RefCell<Transcript>>,
) -> CommandRegistry {
    let clear = {
        let service = Rc::clone(service);
        CommandNode::leaf("Clear the chat", move |_| {
            service.borrow_mut().reset_conversation()?;
            Ok(Outcome::from("Conversation cleared"))
        })
    };

    let set_target = {
        let service = Rc::clone(service);
        CommandNode::with_arg("Switch to another target", "target", move |args| {
            let name = arg(args, "!set target <target>")?;
            service.borrow_mut().select_target(name)?;
            Ok(Outcome::from(format!("Target set to {name}")))
        })
    };

    let set_mode = {
        let session = Rc::clone(session);
        CommandNode::with_arg("Switch to another mode", "mode", move |args| {
            let mode: Mode = arg(args, "!set mode <mode>")?.parse()?;
            session.borrow_mut().set_mode(mode);
            Ok(Outcome::from(format!("Mode set to {mode}")))
        })
    };

    let list_target = {
        let service = Rc::clone(service);
        CommandNode::leaf("Show the list of targets", move |_| {
            let listing = service
                .borrow()
                .targets()
                .iter()
                .map(|t| format!("{} - {}", t.name, t.description))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Outcome::Text(listing))
        })
    };

    let get_target = {
        let service = Rc::clone(service);
        CommandNode::leaf("Show the current target", move |_| {
            Ok(Outcome::from(format!(
                "Current target is {}",
                service.borrow().target()
            )))
        })
    };

    let get_mode = {
        let session = Rc::clone(session);
        CommandNode::leaf("Show the current mode", move |_| {
            Ok(Outcome::from(format!(
                "Current mode is {}",
                session.borrow().mode()
            )))
        })
    };

    let log_on = {
        let transcript = Rc::clone(transcript);
        CommandNode::leaf("Start writing the transcript", move |_| {
            transcript.borrow_mut().set_active(true)?;
            Ok(Outcome::from("Transcript on"))
        })
    };

    let log_off = {
        let transcript = Rc::clone(transcript);
        CommandNode::leaf("Stop writing the transcript", move |_| {
            transcript.borrow_mut().set_active(false)?;
            Ok(Outcome::from("Transcript off"))
        })
    };

    let log_file = {
        let transcript = Rc::clone(transcript);
        CommandNode::with_arg("Write the transcript to a file", "path", move |args| {
            let path = arg(args, "!log file <path>")?;
            let mut transcript = transcript.borrow_mut();
            transcript.open(Path::new(path))?;
            transcript.set_active(true)?;
            Ok(Outcome::from(format!("Transcript written to {path}")))
        })
    };

    CommandRegistry::new()
        .with_marker("!")
        .with_command("!clear", clear)
        .with_command(
            "!set",
            CommandNode::branch(
                "Set value of terminal settings",
                CommandRegistry::new()
                    .with_command("target", set_target)
                    .with_command("mode", set_mode),
            ),
        )
        .with_command(
            "!list",
            CommandNode::branch(
                "List values of terminal settings",
                CommandRegistry::new()
                    .with_command("target", list_target)
                    .with_command(
                        "mode",
                        CommandNode::leaf("Show the available modes", |_| {
                            Ok(Outcome::Text(Session::describe_modes()))
                        }),
                    ),
            ),
        )
        .with_command(
            "!get",
            CommandNode::branch(
                "Get value of terminal settings",
                CommandRegistry::new()
                    .with_command("target", get_target)
                    .with_command("mode", get_mode),
            ),
        )
        .with_command(
            "!log",
            CommandNode::branch(
                "Control the transcript file",
                CommandRegistry::new()
                    .with_command("on", log_on)
                    .with_command("off", log_off)
                    .with_command("file", log_file),
            ),
        )
        .with_command(
            "!exit",
            CommandNode::leaf("Exit the program", |_| Ok(Outcome::Exit)),
        )
        .with_help_key("!help")
}

/// Builds the template command tree (`{{...}}` spans in plain lines).
fn build_templates(service: &Rc<RefCell<dyn ChatService>>) -> CommandRegistry {
    let target = {
        let service = Rc::clone(service);
        CommandNode::leaf("Splice the current target name", move |_| {
            Ok(Outcome::Text(service.borrow().target()))
        })
    };

    CommandRegistry::new()
        .with_delimiters("{{", "}}")
        .with_command(
            "file",
            CommandNode::with_arg("Splice the contents of a file", "file", |args| {
                let path = arg(args, "{{file <path>}}")?;
                let text = fs::read_to_string(path)
                    .map_err(|e| Error::command_failed(format!("cannot read {path}: {e}")))?;
                Ok(Outcome::Text(text.trim_end().to_string()))
            }),
        )
        .with_command("target", target)
}

/// Pulls the first argument token, failing with a usage message.
fn arg<'a>(args: &'a [String], usage: &str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| Error::command_failed(format!("usage: {usage}")))
}
