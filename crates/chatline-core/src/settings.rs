//! Chat settings shared by the session orchestration.
//!
//! These are the participant identities and the fixed user-visible strings
//! the client synthesizes on its own (greeting, failure notices).

use crate::session::Participant;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_ID: &str = "user";
pub const DEFAULT_BOT_ID: &str = "assistant";
pub const DEFAULT_GREETING: &str = "Let's chat!";
pub const DEFAULT_SEND_FAILED_TEXT: &str = "Message sending failed";
pub const DEFAULT_RESOLVE_FAILED_TEXT: &str = "Failed to get the current session";

/// Identities and texts used by `ChatSession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// The local user.
    pub user: Participant,
    /// The assistant answering on the other side.
    pub bot: Participant,
    /// Appended when a message fetch leaves the transcript empty.
    pub greeting: String,
    /// Reply text when a send got no usable answer.
    pub send_failed_text: String,
    /// Reply text when session resolution got no usable session id.
    pub resolve_failed_text: String,
}

impl ChatSettings {
    /// Both participants in the fixed `[user, assistant]` order.
    pub fn participants(&self) -> Vec<Participant> {
        vec![self.user.clone(), self.bot.clone()]
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            user: Participant::new(DEFAULT_USER_ID, "user"),
            bot: Participant::new(DEFAULT_BOT_ID, "assistant"),
            greeting: DEFAULT_GREETING.to_string(),
            send_failed_text: DEFAULT_SEND_FAILED_TEXT.to_string(),
            resolve_failed_text: DEFAULT_RESOLVE_FAILED_TEXT.to_string(),
        }
    }
}
