//! Application layer for Chatline.
//!
//! This crate provides the `ChatSession` use case, which coordinates the
//! domain model with the remote message service, plus default implementations
//! of the notification collaborators.

pub mod chat_session;
pub mod error_reporter;
pub mod event_sink;

pub use chat_session::ChatSession;
pub use error_reporter::TracingErrorReporter;
pub use event_sink::ChannelEventSink;
