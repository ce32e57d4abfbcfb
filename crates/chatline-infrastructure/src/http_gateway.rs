//! HttpMessageGateway - form POST transport for the multiplexed message endpoint.

use crate::credentials::{CredentialProvider, NoCredentials, StaticTokenProvider};
use async_trait::async_trait;
use chatline_core::ChatlineError;
use chatline_core::config::ChatlineConfig;
use chatline_core::error::Result;
use chatline_core::gateway::MessageGateway;
use chatline_core::protocol::{Envelope, GatewayRequest};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// `MessageGateway` that talks to the service over HTTP.
#[derive(Clone)]
pub struct HttpMessageGateway {
    client: Client,
    endpoint_url: String,
    source: String,
    timeout: Duration,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpMessageGateway {
    /// Creates an unauthenticated gateway posting to `endpoint_url`.
    pub fn new(endpoint_url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: endpoint_url.into(),
            source: source.into(),
            timeout: Duration::from_secs(30),
            credentials: Arc::new(NoCredentials),
        }
    }

    /// Creates a gateway from the loaded configuration, using its static token.
    pub fn from_config(config: &ChatlineConfig) -> Self {
        Self::new(config.server.endpoint_url(), &config.server.source)
            .with_timeout(Duration::from_secs(config.server.timeout_secs))
            .with_credentials(Arc::new(StaticTokenProvider::from_config(&config.auth)))
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets where the `Authorization` header comes from.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl MessageGateway for HttpMessageGateway {
    async fn call(&self, request: &GatewayRequest) -> Result<Envelope> {
        let fields = request.form_fields(&self.source);

        let mut http_request = self
            .client
            .post(&self.endpoint_url)
            .form(&fields)
            .timeout(self.timeout);
        if let Some(authorization) = self.credentials.authorization() {
            http_request = http_request.header(AUTHORIZATION, authorization);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ChatlineError::transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("[HttpMessageGateway] {} rejected with 401", request.kind);
            return Err(ChatlineError::Unauthorized);
        }
        if status != StatusCode::OK {
            tracing::warn!("[HttpMessageGateway] {} failed with {}", request.kind, status);
            return Err(ChatlineError::http_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatlineError::transport(e.to_string()))?;
        tracing::debug!("[HttpMessageGateway] {} -> {}", request.kind, body);

        Ok(serde_json::from_str::<Envelope>(&body)?)
    }
}
