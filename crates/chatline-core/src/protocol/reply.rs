//! Typed per-operation results decoded from an [`Envelope`].
//!
//! A shape that does not match what an operation expects is treated as "no
//! usable information", never as an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{Envelope, Payload};

/// Outcome of `get_current_session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResolution {
    /// The service named the current session.
    Resolved(String),
    /// No usable session id; `reason` is the server's explanation if it sent one.
    Unavailable { reason: Option<String> },
}

impl SessionResolution {
    pub fn from_envelope(envelope: &Envelope) -> Self {
        if !envelope.is_success() {
            return Self::Unavailable {
                reason: envelope.failure_reason().map(str::to_string),
            };
        }
        match envelope.payload() {
            Payload::Text(sid) if !sid.trim().is_empty() => Self::Resolved(sid.to_string()),
            other => {
                tracing::warn!(
                    "[SessionResolution] Success envelope without a session id: {:?}",
                    other
                );
                Self::Unavailable { reason: None }
            }
        }
    }
}

/// Outcome of `text`: `(ok, text, session id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReply {
    pub ok: bool,
    /// Assistant reply on success, failure explanation otherwise.
    pub text: String,
    /// Session the service filed the exchange under.
    pub session_id: Option<String>,
}

impl SendReply {
    /// Decodes a send response; `failure_text` is used whenever it is unusable.
    pub fn from_envelope(envelope: &Envelope, failure_text: &str) -> Self {
        let failed = || Self {
            ok: false,
            text: failure_text.to_string(),
            session_id: None,
        };

        if !envelope.is_success() {
            return failed();
        }
        if envelope.kind.as_deref().is_some_and(|kind| kind != "json") {
            tracing::warn!(
                "[SendReply] Unexpected reply type: {:?}",
                envelope.kind.as_deref()
            );
            return failed();
        }
        let Payload::Record(record) = envelope.content_payload() else {
            return failed();
        };
        let Some(Value::String(text)) = record.get("info") else {
            return failed();
        };
        let session_id = match record.get("sid") {
            Some(Value::String(sid)) if !sid.is_empty() => Some(sid.clone()),
            _ => None,
        };

        Self {
            ok: true,
            text: text.clone(),
            session_id,
        }
    }
}

/// One item of a `get_messages` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMessage {
    pub content: String,
    pub sender: String,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// Outcome of `get_messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageListing {
    /// Replace the local list with these items (may be empty).
    Replace(Vec<RemoteMessage>),
    /// Leave the local list untouched.
    Keep,
}

impl MessageListing {
    pub fn from_envelope(envelope: &Envelope) -> Self {
        if !envelope.is_success() {
            return Self::Keep;
        }
        match envelope.payload() {
            Payload::Records(items) => Self::Replace(decode_items(items, "RemoteMessage")),
            Payload::Text(text) => {
                tracing::debug!("[MessageListing] Text instead of messages: {}", text);
                Self::Keep
            }
            _ => Self::Keep,
        }
    }
}

/// One item of a `get_sessions` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSession {
    pub sid: String,
    #[serde(default)]
    pub sname: Option<String>,
}

/// Outcome of `get_sessions` (and of `save_session`, which is applied the same way).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionListing {
    /// Replace the local list; a non-array payload yields an empty list.
    Replace(Vec<RemoteSession>),
    /// Leave the local list untouched.
    Keep,
}

impl SessionListing {
    pub fn from_envelope(envelope: &Envelope) -> Self {
        if !envelope.is_success() {
            return Self::Keep;
        }
        match envelope.payload() {
            Payload::Records(items) => Self::Replace(decode_items(items, "RemoteSession")),
            _ => Self::Replace(Vec::new()),
        }
    }
}

/// Outcome of `clear_session`; only the status is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgement {
    Accepted,
    Rejected { reason: Option<String> },
}

impl Acknowledgement {
    pub fn from_envelope(envelope: &Envelope) -> Self {
        if envelope.is_success() {
            Self::Accepted
        } else {
            Self::Rejected {
                reason: envelope.failure_reason().map(str::to_string),
            }
        }
    }
}

/// Decodes each array item, skipping the ones with an unexpected shape.
fn decode_items<T: DeserializeOwned>(items: &[Value], what: &str) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("[{}] Skipping malformed item {}: {}", what, item, e);
                None
            }
        })
        .collect()
}
