//! Session domain model.

use serde::{Deserialize, Serialize};

/// One side of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier, also used as the message sender id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A conversation thread between the current user and the assistant.
///
/// Sessions only come into existence from a session-list response and are
/// never edited afterwards; a refresh drops and rebuilds all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier assigned by the remote service
    pub id: String,
    /// Display label
    pub name: String,
    /// Always `[user, assistant]`
    pub participants: Vec<Participant>,
}

impl Session {
    /// Creates a session, falling back to the id when the name is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>, participants: Vec<Participant>) -> Self {
        let id = id.into();
        let name = name.into();
        let name = if name.trim().is_empty() { id.clone() } else { name };
        Self {
            id,
            name,
            participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_falls_back_to_id() {
        let session = Session::new("S1", "  ", Vec::new());
        assert_eq!(session.name, "S1");

        let session = Session::new("S2", "Weekend plans", Vec::new());
        assert_eq!(session.name, "Weekend plans");
    }
}
