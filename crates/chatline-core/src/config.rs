//! Client configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so a missing or partial file is fine.

use crate::session::Participant;
use crate::settings::{
    ChatSettings, DEFAULT_BOT_ID, DEFAULT_GREETING, DEFAULT_RESOLVE_FAILED_TEXT,
    DEFAULT_SEND_FAILED_TEXT, DEFAULT_USER_ID,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_ENDPOINT: &str = "api/message/";
pub const DEFAULT_SOURCE: &str = "web";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_AUTH_SCHEME: &str = "Token";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChatlineConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub chat: ChatConfig,
}

/// Where the message endpoint lives.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    /// Path of the multiplexed endpoint, relative to `base_url`
    pub endpoint: String,
    /// Channel tag sent with every request
    pub source: String,
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// `base_url` and `endpoint` joined with exactly one slash.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    pub token: Option<String>,
    /// Authorization scheme placed before the token
    pub scheme: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: None,
            scheme: DEFAULT_AUTH_SCHEME.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    pub user_id: String,
    pub user_name: String,
    pub bot_id: String,
    pub bot_name: String,
    pub greeting: String,
    pub send_failed_text: String,
    pub resolve_failed_text: String,
}

impl ChatConfig {
    pub fn to_settings(&self) -> ChatSettings {
        ChatSettings {
            user: Participant::new(&self.user_id, &self.user_name),
            bot: Participant::new(&self.bot_id, &self.bot_name),
            greeting: self.greeting.clone(),
            send_failed_text: self.send_failed_text.clone(),
            resolve_failed_text: self.resolve_failed_text.clone(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            user_name: "user".to_string(),
            bot_id: DEFAULT_BOT_ID.to_string(),
            bot_name: "assistant".to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            send_failed_text: DEFAULT_SEND_FAILED_TEXT.to_string(),
            resolve_failed_text: DEFAULT_RESOLVE_FAILED_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ChatlineConfig = toml::from_str(
            r#"
            [server]
            base_url = "https://chat.example.com"

            [chat]
            greeting = "Hi!"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.source, "web");
        assert_eq!(config.server.endpoint_url(), "https://chat.example.com/api/message/");
        assert_eq!(config.auth.scheme, "Token");
        assert_eq!(config.chat.to_settings().greeting, "Hi!");
        assert_eq!(config.chat.to_settings(), ChatSettings {
            greeting: "Hi!".to_string(),
            ..ChatSettings::default()
        });
    }
}
