//! Interactive chat REPL.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::{Overrides, connect, render};

const SLASH_COMMANDS: &[&str] = &["/history", "/sessions", "/switch", "/new", "/clear", "/help"];

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Empty,
    History,
    Sessions,
    Switch(&'a str),
    New,
    Clear,
    Help,
    Unknown(&'a str),
    Say(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return Input::Quit;
    }
    if !trimmed.starts_with('/') {
        return Input::Say(trimmed);
    }

    let (command, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (trimmed, ""),
    };
    match command {
        "/history" => Input::History,
        "/sessions" => Input::Sessions,
        "/switch" if !argument.is_empty() => Input::Switch(argument),
        "/new" => Input::New,
        "/clear" => Input::Clear,
        "/help" => Input::Help,
        _ => Input::Unknown(trimmed),
    }
}

/// Completion, highlighting and hints for slash commands.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: SLASH_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, Vec::new()));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

fn print_help() {
    println!("{}", "Type a message and press enter to send it.".bright_black());
    println!("{}", "  /history        show the current session".bright_black());
    println!("{}", "  /sessions       list sessions".bright_black());
    println!("{}", "  /switch <id>    open another session".bright_black());
    println!("{}", "  /new            save this session and start a new one".bright_black());
    println!("{}", "  /clear          clear this session".bright_black());
    println!("{}", "  quit | exit     leave".bright_black());
}

pub async fn run(overrides: &Overrides) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper::new()));

    println!("{}", "=== Chatline ===".bright_magenta().bold());
    println!("{}", "Type '/help' for commands, or 'quit' to exit.".bright_black());
    println!();

    chat.fetch_messages().await;
    render::drain_events(&mut events);
    render::print_current_session(&chat);
    render::print_messages(&chat, chat.messages());

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("Input error: {}", e).red());
                break;
            }
        };

        let input = parse_input(&line);
        if !matches!(input, Input::Empty | Input::Quit) {
            let _ = rl.add_history_entry(line.trim());
        }

        match input {
            Input::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Input::Empty => continue,
            Input::Help => print_help(),
            Input::Unknown(command) => {
                println!("{}", format!("Unknown command: {}", command).bright_black());
            }
            Input::History => {
                chat.fetch_messages().await;
                render::print_messages(&chat, chat.messages());
            }
            Input::Sessions => {
                chat.fetch_sessions().await;
                render::print_sessions(&chat);
            }
            Input::Switch(session_id) => {
                chat.switch_session(session_id).await;
                render::print_current_session(&chat);
                render::print_messages(&chat, chat.messages());
            }
            Input::New => {
                chat.new_session().await;
                render::print_current_session(&chat);
                render::print_messages(&chat, chat.messages());
            }
            Input::Clear => {
                chat.clear_session().await;
                render::print_current_session(&chat);
                render::print_messages(&chat, chat.messages());
            }
            Input::Say(text) => {
                let held = chat.current_session_id().map(str::to_string);
                chat.send_message(text).await;
                if chat.current_session_id() != held.as_deref() {
                    render::print_current_session(&chat);
                }
                if let Some(reply) = chat.messages().last() {
                    render::print_message(&chat, reply);
                }
            }
        }

        render::drain_events(&mut events);
    }

    Ok(())
}
