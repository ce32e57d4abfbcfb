//! Infrastructure layer for Chatline: HTTP transport, credentials and
//! configuration storage.

pub mod config_service;
pub mod credentials;
pub mod http_gateway;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::credentials::{CredentialProvider, NoCredentials, StaticTokenProvider};
pub use crate::http_gateway::HttpMessageGateway;
pub use crate::paths::ChatlinePaths;
