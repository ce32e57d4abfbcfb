use serde::{Deserialize, Serialize};

use super::MessageTimestamp;

/// A single chat message as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the transcript at append time. Reassigned on every reload.
    pub ordinal: usize,
    /// Text content.
    pub body: String,
    /// Either the current user id or the bot id.
    pub sender_id: String,
    /// When the message was written (server time) or appended (local time).
    pub timestamp: MessageTimestamp,
}

impl Message {
    /// `YYYY-MM-DD` component of the timestamp.
    pub fn date(&self) -> String {
        self.timestamp.date_label()
    }

    /// `HH:MM` component of the timestamp.
    pub fn time(&self) -> String {
        self.timestamp.time_label()
    }

    pub fn is_from(&self, sender_id: &str) -> bool {
        self.sender_id == sender_id
    }
}
