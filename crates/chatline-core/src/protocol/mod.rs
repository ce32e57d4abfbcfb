//! Wire protocol of the single multiplexed message endpoint.
//!
//! Every call is a form post distinguished by an `rtype` tag and every
//! response is the same loosely shaped envelope. Responses are decoded once,
//! here, into one strict result type per operation so that the session logic
//! never inspects raw JSON.

mod envelope;
mod reply;
mod request;

pub use envelope::{Envelope, Payload, STATUS_SUCCESS};
pub use reply::{
    Acknowledgement, MessageListing, RemoteMessage, RemoteSession, SendReply, SessionListing,
    SessionResolution,
};
pub use request::{GatewayRequest, RequestKind};
