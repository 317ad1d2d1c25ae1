//! Parley CLI entry point.

use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use parley_client::{ChatService, EchoService};
use parley_runtime::{Mode, Reply, Terminal};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    target: Option<String>,
    mode: Option<Mode>,
    transcript: Option<PathBuf>,
    lines: Vec<String>,
    batch: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch = true,
            "-t" | "--target" => {
                i += 1;
                let name = args
                    .get(i)
                    .ok_or("--target requires a value")?;
                config.target = Some(name.clone());
            }
            "-m" | "--mode" => {
                i += 1;
                let mode = args.get(i).ok_or("--mode requires a value")?;
                config.mode = Some(mode.parse().map_err(|_| format!("invalid --mode value: {mode}"))?);
            }
            "--transcript" => {
                i += 1;
                let path = args.get(i).ok_or("--transcript requires a value")?;
                config.transcript = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            line => config.lines.push(line.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("parley {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // The echo service is the stock transport; a networked one plugs in
    // through the same trait.
    let service: Rc<RefCell<dyn ChatService>> = Rc::new(RefCell::new(EchoService::new()));
    if let Some(target) = &config.target {
        service.borrow_mut().select_target(target)?;
    }

    let mut terminal = Terminal::new(Rc::clone(&service))?;

    if let Some(mode) = config.mode {
        terminal.session().borrow_mut().set_mode(mode);
    }
    if let Some(path) = &config.transcript {
        let transcript = terminal.transcript();
        let mut transcript = transcript.borrow_mut();
        transcript.open(path)?;
        transcript.set_active(true)?;
    }

    // Run any lines given on the command line before going interactive.
    for line in &config.lines {
        match terminal.eval_line(line)? {
            Reply::Command(text) | Reply::Chat(text) => println!("{text}"),
            Reply::Streamed => println!(),
            Reply::Silent => {}
            Reply::Exit => return Ok(()),
        }
    }

    if config.batch {
        return Ok(());
    }

    if !config.lines.is_empty() {
        terminal = terminal.without_banner();
    }

    terminal.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParley\x1b[0m - Interactive chat terminal

\x1b[1mUSAGE:\x1b[0m
    parley [OPTIONS] [LINES...]

\x1b[1mARGUMENTS:\x1b[0m
    [LINES...]    Lines to evaluate before starting the terminal

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -t, --target NAME     Select the conversation target
    -m, --mode MODE       Reply mode: interactive or batch
    -b, --batch           Evaluate lines and exit (no terminal)
    --transcript FILE     Write a transcript of the session to FILE

\x1b[1mEXAMPLES:\x1b[0m
    parley                          Start the interactive terminal
    parley -t shout                 Start talking to the shout target
    parley -b '!list target'        List targets and exit
    parley --transcript chat.log    Keep a transcript

\x1b[1mTERMINAL COMMANDS:\x1b[0m
    !help                 List commands
    !clear                Clear the conversation
    !set target <name>    Switch target      !get target
    !set mode <mode>      Switch mode        !get mode
    !log on|off|file      Control the transcript
    !exit                 Quit
    {{{{file <path>}}}}       Splice a file into an outgoing line
    Ctrl+D                Exit
    Ctrl+C                Cancel current input"
    );
}
