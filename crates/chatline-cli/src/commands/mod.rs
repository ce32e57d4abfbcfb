pub mod config;
pub mod conversation;
pub mod interactive;
pub mod render;

use anyhow::{Context, Result};
use chatline_application::{ChannelEventSink, ChatSession};
use chatline_core::config::ChatlineConfig;
use chatline_core::session::ChatEvent;
use chatline_infrastructure::{ConfigService, HttpMessageGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Values given on the command line; they win over config file and environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl Overrides {
    pub fn config_service(&self) -> Result<ConfigService> {
        match &self.config_path {
            Some(path) => Ok(ConfigService::with_path(path.clone())),
            None => ConfigService::new_default().context("Failed to locate config directory"),
        }
    }

    pub fn load_config(&self) -> Result<ChatlineConfig> {
        let mut config = self
            .config_service()?
            .get_config()
            .context("Failed to load configuration")?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ChatlineConfig) {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.auth.token = Some(token.clone());
        }
    }
}

/// Builds a chat session over HTTP, with its list updates routed to a channel.
pub fn connect(config: &ChatlineConfig) -> (ChatSession, UnboundedReceiver<ChatEvent>) {
    let gateway = HttpMessageGateway::from_config(config);
    tracing::debug!("[cli] Using endpoint {}", gateway.endpoint_url());

    let (sink, events) = ChannelEventSink::channel();
    let session = ChatSession::new(Arc::new(gateway), config.chat.to_settings())
        .with_event_sink(Arc::new(sink));
    (session, events)
}
