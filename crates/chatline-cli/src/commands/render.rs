//! Terminal rendering of messages and sessions.

use chatline_application::ChatSession;
use chatline_core::message::Message;
use chatline_core::session::{ChatEvent, Session};
use colored::Colorize;
use tokio::sync::mpsc::UnboundedReceiver;

/// `[2024-05-01 10:00] name` header for one message.
pub fn message_header(message: &Message, author: &str) -> String {
    format!("[{} {}] {}", message.date(), message.time(), author)
}

/// One line per session; the active one is marked with `*`.
pub fn session_line(session: &Session, current: Option<&str>) -> String {
    let marker = if current == Some(session.id.as_str()) { "*" } else { " " };
    if session.name == session.id {
        format!("{} {}", marker, session.id)
    } else {
        format!("{} {}  {}", marker, session.id, session.name)
    }
}

pub fn print_message(chat: &ChatSession, message: &Message) {
    let settings = chat.settings();
    let from_user = message.is_from(&settings.user.id);
    let author = if from_user {
        settings.user.name.as_str()
    } else if message.is_from(&settings.bot.id) {
        settings.bot.name.as_str()
    } else {
        message.sender_id.as_str()
    };

    println!("{}", message_header(message, author).bright_black());
    for line in message.body.lines() {
        if from_user {
            println!("{}", line.green());
        } else {
            println!("{}", line.bright_blue());
        }
    }
}

pub fn print_messages(chat: &ChatSession, messages: &[Message]) {
    for message in messages {
        print_message(chat, message);
    }
}

pub fn print_sessions(chat: &ChatSession) {
    if chat.sessions().is_empty() {
        println!("{}", "No sessions".bright_black());
        return;
    }
    for session in chat.sessions() {
        let line = session_line(session, chat.current_session_id());
        if chat.current_session_id() == Some(session.id.as_str()) {
            println!("{}", line.bright_yellow());
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_current_session(chat: &ChatSession) {
    match chat.current_session_id() {
        Some(id) => println!("{}", format!("Current session: {}", id).bright_magenta()),
        None => println!("{}", "No active session".bright_red()),
    }
}

/// Logs the list rebuilds that happened during the last operation.
pub fn drain_events(events: &mut UnboundedReceiver<ChatEvent>) {
    while let Ok(event) = events.try_recv() {
        match &event {
            ChatEvent::MessagesUpdated(messages) => {
                tracing::debug!("[cli] {}: {} messages", event.name(), messages.len());
            }
            ChatEvent::SessionsUpdated(sessions) => {
                tracing::debug!("[cli] {}: {} sessions", event.name(), sessions.len());
            }
        }
    }
}
