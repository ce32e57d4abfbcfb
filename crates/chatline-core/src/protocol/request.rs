use serde::{Deserialize, Serialize};

/// The `rtype` discriminator of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    GetCurrentSession,
    GetSessions,
    GetMessages,
    /// Send a user message.
    Text,
    ClearSession,
    SaveSession,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetCurrentSession => "get_current_session",
            Self::GetSessions => "get_sessions",
            Self::GetMessages => "get_messages",
            Self::Text => "text",
            Self::ClearSession => "clear_session",
            Self::SaveSession => "save_session",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call against the message endpoint.
///
/// The channel `source` tag is not part of the request; the gateway adds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    pub kind: RequestKind,
    /// Session id, empty when none is held.
    pub sid: String,
    /// Message text (send only).
    pub content: Option<String>,
    /// Create a session if none exists (resolution only).
    pub create: Option<bool>,
    /// Always `false` for this client when present.
    pub is_group: Option<bool>,
}

impl GatewayRequest {
    /// `get_current_session`, always sent without a session id.
    pub fn current_session(create: bool) -> Self {
        Self {
            kind: RequestKind::GetCurrentSession,
            sid: String::new(),
            content: None,
            create: Some(create),
            is_group: Some(false),
        }
    }

    /// `text` carrying the trimmed message content.
    pub fn text(sid: Option<&str>, content: &str) -> Self {
        Self {
            kind: RequestKind::Text,
            sid: sid.unwrap_or_default().to_string(),
            content: Some(content.trim().to_string()),
            create: None,
            is_group: Some(false),
        }
    }

    /// Any request that only carries the session id
    /// (`get_sessions`, `get_messages`, `clear_session`, `save_session`).
    pub fn scoped(kind: RequestKind, sid: Option<&str>) -> Self {
        Self {
            kind,
            sid: sid.unwrap_or_default().to_string(),
            content: None,
            create: None,
            is_group: None,
        }
    }

    /// Form fields in the order the service documents them.
    pub fn form_fields(&self, source: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![("rtype", self.kind.as_str().to_string())];
        if let Some(content) = &self.content {
            fields.push(("content", content.clone()));
        }
        fields.push(("sid", self.sid.clone()));
        if let Some(is_group) = self.is_group {
            fields.push(("is_group", is_group.to_string()));
        }
        fields.push(("source", source.to_string()));
        if let Some(create) = self.create {
            fields.push(("create", create.to_string()));
        }
        fields
    }
}
