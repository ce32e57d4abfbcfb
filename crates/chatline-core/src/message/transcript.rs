//! The ordered message sequence of the active session.

use super::{Message, MessageTimestamp};

/// Messages of one session, always indexed `0..n-1` without gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message with the next ordinal.
    ///
    /// A missing timestamp means "now".
    pub fn append(
        &mut self,
        body: impl Into<String>,
        sender_id: impl Into<String>,
        timestamp: Option<MessageTimestamp>,
    ) -> &Message {
        let message = Message {
            ordinal: self.messages.len(),
            body: body.into(),
            sender_id: sender_id.into(),
            timestamp: timestamp.unwrap_or_else(MessageTimestamp::now),
        };
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Discards every message and rebuilds the sequence from `items`.
    ///
    /// Items are `(body, sender_id, raw server timestamp)`; ordinals, dates
    /// and times are derived again for each one.
    pub fn replace_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (String, String, Option<String>)>,
    {
        self.messages.clear();
        for (body, sender_id, created_time) in items {
            let timestamp = MessageTimestamp::parse_or_now(created_time.as_deref());
            self.append(body, sender_id, Some(timestamp));
        }
    }

    /// Appends `greeting` from `bot_id` when the transcript is empty.
    ///
    /// Returns `true` if the greeting was added.
    pub fn ensure_greeting(&mut self, greeting: &str, bot_id: &str) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.append(greeting, bot_id, None);
        true
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}
