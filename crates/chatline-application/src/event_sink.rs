//! Channel backed event sink.
//!
//! Forwards `ChatEvent`s to whoever renders the conversation, so state
//! updates and rendering run decoupled.

use chatline_core::gateway::EventSink;
use chatline_core::session::ChatEvent;
use tokio::sync::mpsc;

/// An `EventSink` that sends every event into an unbounded channel.
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<ChatEvent>,
}

impl ChannelEventSink {
    /// Create a new sink with the given channel sender
    pub fn new(sender: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self { sender }
    }

    /// Create a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ChatEvent) {
        tracing::debug!("[ChannelEventSink] Emitting {}", event.name());
        // Non-blocking send - if the receiver is dropped, we just skip
        let _ = self.sender.send(event);
    }
}
