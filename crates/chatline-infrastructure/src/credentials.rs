//! Authorization header injection.
//!
//! Obtaining and refreshing credentials is the host application's business;
//! the gateway only asks for the header value to attach to each call.

use chatline_core::config::AuthConfig;

/// Supplies the `Authorization` header for each request.
pub trait CredentialProvider: Send + Sync {
    /// The full header value, or `None` to send the request unauthenticated.
    fn authorization(&self) -> Option<String>;
}

/// Sends every request unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn authorization(&self) -> Option<String> {
        None
    }
}

/// A fixed token, sent as `<scheme> <token>`.
#[derive(Clone)]
pub struct StaticTokenProvider {
    header: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(scheme: &str, token: Option<String>) -> Self {
        let header = token
            .filter(|token| !token.trim().is_empty())
            .map(|token| match scheme.trim() {
                "" => token,
                scheme => format!("{} {}", scheme, token),
            });
        Self { header }
    }

    pub fn from_config(auth: &AuthConfig) -> Self {
        Self::new(&auth.scheme, auth.token.clone())
    }
}

impl CredentialProvider for StaticTokenProvider {
    fn authorization(&self) -> Option<String> {
        self.header.clone()
    }
}
