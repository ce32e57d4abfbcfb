//! Collaborator traits.
//!
//! `ChatSession` talks to the outside world only through these seams, which
//! keeps the synchronization logic independent of the HTTP client, the UI and
//! whatever error reporting the host application uses.

use async_trait::async_trait;

use crate::error::{ChatlineError, Result};
use crate::protocol::{Envelope, GatewayRequest, RequestKind};
use crate::session::ChatEvent;

/// The remote message service: one RPC-style endpoint for every operation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return `Err(ChatlineError::Unauthorized)` for a 401 response
/// - Return an error for any other non-200 status
/// - Decode the body into an [`Envelope`] without interpreting it
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Performs one round trip.
    ///
    /// # Returns
    ///
    /// - `Ok(Envelope)`: The service answered with status 200
    /// - `Err(_)`: Transport failure, authentication rejection or bad status
    async fn call(&self, request: &GatewayRequest) -> Result<Envelope>;
}

/// Receives notifications when a local list has been rebuilt.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ChatEvent);
}

/// Receives authentication rejections, e.g. to send the user back to login.
pub trait ErrorReporter: Send + Sync {
    fn report_unauthorized(&self, operation: RequestKind, error: &ChatlineError);
}
