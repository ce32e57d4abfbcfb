//! Domain layer for Chatline.
//!
//! Holds the session and message models, the wire protocol spoken with the
//! remote message service, and the collaborator traits the application layer
//! is wired against.

pub mod config;
pub mod error;
pub mod gateway;
pub mod message;
pub mod protocol;
pub mod session;
pub mod settings;

// Re-export common error type
pub use error::ChatlineError;
