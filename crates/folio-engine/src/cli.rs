//! Interactive and scripted front-ends for the terminal session.

use std::error::Error;
use std::io::{self, Write};
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use folio_common::protocol::ChatMessage;
use folio_common::route::Route;

use crate::chat::ChatBackend;
use crate::pages;
use crate::ratelimit::{throttle_message, Gate, RateLimitWindow};
use crate::session::{Navigator, Session, PROMPT_PREFIX};

/// ANSI clear-screen plus cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Clone, Copy)]
pub struct OutputHandlers {
    pub out: fn(&str),
    pub err: fn(&str),
}

pub struct ReplOptions<'a> {
    pub prompt: &'a str,
    pub exit_commands: &'a [&'a str],
    pub handle_ctrl_c: bool,
    pub ctrl_c_message: Option<&'a str>,
}

impl Default for ReplOptions<'_> {
    fn default() -> Self {
        Self {
            prompt: "➜ visitor@portfolio:~$ ",
            exit_commands: &["exit", "quit"],
            handle_ctrl_c: true,
            ctrl_c_message: Some("Session closed."),
        }
    }
}

/// Navigator that renders the target page through the output handler.
pub struct PrintingNavigator {
    output: OutputHandlers,
}

impl PrintingNavigator {
    pub fn new(output: OutputHandlers) -> Self {
        Self { output }
    }
}

impl Navigator for PrintingNavigator {
    fn navigate(&mut self, route: Route) {
        info!(path = route.as_path(), "route change");
        for line in pages::render(route) {
            (self.output.out)(&line);
        }
    }
}

/// Possible outcomes from reading a single REPL line.
enum ReadLineResult {
    /// A non-empty input line to process.
    Input(String),
    /// Empty line -- submit anyway (the interpreter treats it as a no-op),
    /// so scrollback accounting stays faithful.
    Empty,
    /// EOF or exit command -- terminate the loop.
    Exit,
    /// I/O error while reading.
    Error(io::Error),
}

fn classify_line(
    result: Result<Option<String>, io::Error>,
    exit_commands: &[&str],
) -> ReadLineResult {
    match result {
        Ok(Some(input)) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() {
                ReadLineResult::Empty
            } else if exit_commands.contains(&trimmed.as_str()) {
                ReadLineResult::Exit
            } else {
                ReadLineResult::Input(trimmed)
            }
        }
        Ok(None) => ReadLineResult::Exit,
        Err(e) => ReadLineResult::Error(e),
    }
}

async fn read_line(
    reader: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
    options: &ReplOptions<'_>,
    output: OutputHandlers,
) -> ReadLineResult {
    if options.handle_ctrl_c {
        tokio::select! {
            line = reader.next_line() => classify_line(line, options.exit_commands),
            _ = tokio::signal::ctrl_c() => {
                if let Some(message) = options.ctrl_c_message {
                    (output.out)(message);
                }
                ReadLineResult::Exit
            }
        }
    } else {
        classify_line(reader.next_line().await, options.exit_commands)
    }
}

fn apply_submission(
    session: &mut Session,
    navigator: &mut PrintingNavigator,
    output: OutputHandlers,
    raw: &str,
) {
    session.set_input(raw);
    let result = session.submit_input(navigator);
    if result.should_clear {
        print!("{CLEAR_SCREEN}");
    }
    for line in &result.output {
        (output.out)(line);
    }
}

/// Interactive terminal session on stdin/stdout.
pub async fn run_repl(output: OutputHandlers, options: ReplOptions<'_>) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    let mut navigator = PrintingNavigator::new(output);

    for line in session.scrollback() {
        (output.out)(line);
    }

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin).lines();
    let mut stdout = io::stdout();

    loop {
        print!("{}", options.prompt);
        stdout.flush()?;

        match read_line(&mut reader, &options, output).await {
            ReadLineResult::Input(line) => {
                apply_submission(&mut session, &mut navigator, output, &line)
            }
            ReadLineResult::Empty => continue,
            ReadLineResult::Exit => break,
            ReadLineResult::Error(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Execute a command script non-interactively. Blank lines and
/// `#`-comments are skipped; every other line runs through the same
/// submission pipeline as typed input.
pub fn run_file(output: OutputHandlers, path: &str) -> Result<(), Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    let mut session = Session::bare();
    let mut navigator = PrintingNavigator::new(output);

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        (output.out)(&format!("{PROMPT_PREFIX} {trimmed}"));
        apply_submission(&mut session, &mut navigator, output, trimmed);
    }
    Ok(())
}

pub struct ChatOptions<'a> {
    pub banner_lines: &'a [&'a str],
    pub prompt: &'a str,
    pub exit_commands: &'a [&'a str],
}

impl Default for ChatOptions<'_> {
    fn default() -> Self {
        Self {
            banner_lines: &[
                "[SYSTEM] specialized_agent_loaded --version 1.0",
                "[SYSTEM] connection_established",
                "[INFO] Type a message to start interacting...",
            ],
            prompt: "➜ ai@chat:~$ ",
            exit_commands: &["exit", "quit"],
        }
    }
}

/// Interactive chat session against a folio server. The local rate-limit
/// window is consulted before every send; throttled submissions surface a
/// countdown message and never reach the network.
pub async fn run_chat(
    backend: &dyn ChatBackend,
    window: &mut RateLimitWindow,
    output: OutputHandlers,
    options: ChatOptions<'_>,
) -> Result<(), Box<dyn Error>> {
    for line in options.banner_lines {
        (output.out)(line);
    }

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin).lines();
    let mut stdout = io::stdout();
    let mut history: Vec<ChatMessage> = Vec::new();

    loop {
        print!("{}", options.prompt);
        stdout.flush()?;

        let line = match classify_line(reader.next_line().await, options.exit_commands) {
            ReadLineResult::Input(line) => line,
            ReadLineResult::Empty => continue,
            ReadLineResult::Exit => break,
            ReadLineResult::Error(e) => return Err(e.into()),
        };

        let now = Instant::now();
        if let Gate::Throttled { retry_after } = window.check(now) {
            (output.out)(&throttle_message(retry_after));
            continue;
        }
        window.record(now);

        history.push(ChatMessage::user(line));
        print!("[AI] ");
        stdout.flush()?;
        let mut sink = |delta: &str| {
            print!("{delta}");
            let _ = io::stdout().flush();
        };
        match backend.send(&history, &mut sink).await {
            Ok(reply) => {
                println!();
                history.push(ChatMessage::assistant(reply));
            }
            Err(e) => {
                println!();
                (output.err)(&format!("Chat error: {e}"));
                // Leave the failed turn in history so the user can retry
                // with context intact.
            }
        }
    }
    Ok(())
}
