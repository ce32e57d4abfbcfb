use serde::{Deserialize, Serialize};

use super::Session;
use crate::message::Message;

/// Notifications published after a local list has been fully replaced.
///
/// Single-message appends (replies, failure notices, the greeting) never
/// produce an event; consumers re-read the getters after each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    /// The message list was rebuilt from a fetch.
    #[serde(rename = "message-updated")]
    MessagesUpdated(Vec<Message>),
    /// The session list was rebuilt from a fetch.
    #[serde(rename = "session-updated")]
    SessionsUpdated(Vec<Session>),
}

impl ChatEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MessagesUpdated(_) => "message-updated",
            Self::SessionsUpdated(_) => "session-updated",
        }
    }
}
