//! Session and message synchronization for one conversation view.

use chatline_core::ChatlineError;
use chatline_core::error::Result;
use chatline_core::gateway::{ErrorReporter, EventSink, MessageGateway};
use chatline_core::message::{Message, Transcript};
use chatline_core::protocol::{
    Acknowledgement, Envelope, GatewayRequest, MessageListing, RequestKind, SendReply,
    SessionListing, SessionResolution,
};
use chatline_core::session::{ChatEvent, Session};
use chatline_core::settings::ChatSettings;
use std::sync::Arc;

use crate::error_reporter::TracingErrorReporter;

/// Keeps the local view of one conversation consistent with the service.
///
/// `ChatSession` is responsible for:
/// - Resolving which session is active before messages are touched
/// - Sending messages and appending the assistant's reply
/// - Rebuilding the session and message lists from the service
/// - Clearing and creating sessions
///
/// Every operation absorbs its own failures: they show up as assistant
/// messages in the transcript (or as an unresolved session), never as an
/// `Err` returned to the caller. Mutating operations take `&mut self`, so one
/// operation is in flight at a time; hosts sharing the session between tasks
/// wrap it in `tokio::sync::Mutex`.
pub struct ChatSession {
    /// Remote message service
    gateway: Arc<dyn MessageGateway>,
    /// Receives list rebuild notifications
    event_sink: Option<Arc<dyn EventSink>>,
    /// Receives authentication rejections
    error_reporter: Arc<dyn ErrorReporter>,
    /// Participants and client side texts
    settings: ChatSettings,
    /// Active session, `None` until resolved
    current_session_id: Option<String>,
    /// Newest first
    sessions: Vec<Session>,
    /// Messages of the active session only
    messages: Transcript,
    /// Session the transcript was loaded for
    transcript_session_id: Option<String>,
}

impl ChatSession {
    /// Creates an unresolved session view.
    ///
    /// Call [`ChatSession::fetch_messages`] (or any other operation) to
    /// bootstrap it.
    pub fn new(gateway: Arc<dyn MessageGateway>, settings: ChatSettings) -> Self {
        Self {
            gateway,
            event_sink: None,
            error_reporter: Arc::new(TracingErrorReporter),
            settings,
            current_session_id: None,
            sessions: Vec::new(),
            messages: Transcript::new(),
            transcript_session_id: None,
        }
    }

    /// Sets the sink notified after list rebuilds.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = Some(event_sink);
        self
    }

    /// Replaces the default (logging) error reporter.
    pub fn with_error_reporter(mut self, error_reporter: Arc<dyn ErrorReporter>) -> Self {
        self.error_reporter = error_reporter;
        self
    }

    pub fn current_session_id(&self) -> Option<&str> {
        self.current_session_id.as_deref()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.as_slice()
    }

    pub fn current_user_id(&self) -> &str {
        &self.settings.user.id
    }

    pub fn bot_id(&self) -> &str {
        &self.settings.bot.id
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    // ============================================================================
    // Session bootstrap
    // ============================================================================

    /// Makes sure a session id is held before a message operation.
    ///
    /// Returns `true` if one was already held. Otherwise a resolution attempt
    /// is made and `false` is returned whatever its outcome; callers re-check
    /// [`ChatSession::current_session_id`] instead of treating `false` as failure.
    pub async fn ensure_session(&mut self) -> bool {
        if self.current_session_id.is_some() {
            return true;
        }
        self.resolve_current_session(false).await;
        false
    }

    /// Asks the service for the current session, optionally creating one.
    ///
    /// The held id is dropped before the call so that a stale id is never
    /// used while resolving. On success the session and message lists are
    /// rebuilt for the new id; on failure an assistant message explains why
    /// and the id stays `None`.
    pub async fn resolve_current_session(&mut self, create: bool) {
        self.current_session_id = None;

        let request = GatewayRequest::current_session(create);
        let envelope = match self.call(&request).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("[ChatSession] Session resolution failed: {}", e);
                self.append_bot_message(e.to_string());
                return;
            }
        };

        match SessionResolution::from_envelope(&envelope) {
            SessionResolution::Resolved(session_id) => self.reconcile(session_id).await,
            SessionResolution::Unavailable { reason } => {
                tracing::warn!(
                    "[ChatSession] No session resolved (create={}): {:?}",
                    create,
                    reason
                );
                let text = reason.unwrap_or_else(|| self.settings.resolve_failed_text.clone());
                self.append_bot_message(text);
            }
        }
    }

    /// Adopts `session_id` and rebuilds both lists from the service.
    async fn reconcile(&mut self, session_id: String) {
        tracing::info!("[ChatSession] Active session: {}", session_id);
        self.adopt_session(session_id);
        self.refresh_sessions().await;
        self.refresh_messages().await;
    }

    // ============================================================================
    // Messages
    // ============================================================================

    /// Sends `content` and appends exactly one assistant message.
    ///
    /// Content is trimmed but otherwise not validated; the service decides
    /// what an empty message means. If the service files the exchange under a
    /// different session, that session is adopted and reconciled before the
    /// reply is appended.
    pub async fn send_message(&mut self, content: &str) {
        let request = GatewayRequest::text(self.current_session_id.as_deref(), content);

        let text = match self.call(&request).await {
            Ok(envelope) => {
                let reply = SendReply::from_envelope(&envelope, &self.settings.send_failed_text);
                if reply.ok {
                    if let Some(session_id) = reply.session_id {
                        if self.current_session_id.as_deref() != Some(session_id.as_str()) {
                            tracing::info!(
                                "[ChatSession] Reply filed under another session ({:?} -> {})",
                                self.current_session_id,
                                session_id
                            );
                            self.reconcile(session_id).await;
                        }
                    }
                } else {
                    tracing::warn!("[ChatSession] Send was not accepted");
                }
                reply.text
            }
            Err(e) => {
                tracing::warn!("[ChatSession] Send failed: {}", e);
                e.to_string()
            }
        };

        self.append_bot_message(text);
    }

    /// Rebuilds the message list of the active session.
    ///
    /// Returns silently when no session was held (the resolution that just
    /// ran has already rebuilt the lists or reported its failure). Afterwards
    /// the transcript always holds at least the greeting.
    pub async fn fetch_messages(&mut self) {
        if !self.ensure_session().await {
            return;
        }
        self.refresh_messages().await;
    }

    /// Selects another session and reloads its messages.
    pub async fn switch_session(&mut self, session_id: impl Into<String>) {
        let session_id = session_id.into();
        tracing::info!("[ChatSession] Switching to session {}", session_id);
        self.adopt_session(session_id);
        self.refresh_messages().await;
    }

    /// Holds `session_id`, dropping a transcript that belongs to another session.
    ///
    /// Runs before the reload, so a failed reload leaves no foreign messages.
    fn adopt_session(&mut self, session_id: String) {
        if self.transcript_session_id.as_deref() != Some(session_id.as_str()) {
            tracing::debug!(
                "[ChatSession] Dropping transcript of {:?}",
                self.transcript_session_id
            );
            self.messages.clear();
            self.transcript_session_id = Some(session_id.clone());
        }
        self.current_session_id = Some(session_id);
    }

    async fn refresh_messages(&mut self) {
        let request =
            GatewayRequest::scoped(RequestKind::GetMessages, self.current_session_id.as_deref());

        match self.call(&request).await {
            Ok(envelope) => match MessageListing::from_envelope(&envelope) {
                MessageListing::Replace(items) => {
                    tracing::debug!("[ChatSession] Replacing {} messages", items.len());
                    self.messages.replace_all(
                        items
                            .into_iter()
                            .map(|item| (item.content, item.sender, item.created_time)),
                    );
                    self.messages
                        .ensure_greeting(&self.settings.greeting, &self.settings.bot.id);
                    self.emit(ChatEvent::MessagesUpdated(self.messages.as_slice().to_vec()));
                }
                MessageListing::Keep => {
                    tracing::debug!("[ChatSession] Message list unchanged");
                }
            },
            Err(e) => {
                tracing::warn!("[ChatSession] Fetching messages failed: {}", e);
                self.append_bot_message(e.to_string());
            }
        }

        self.messages
            .ensure_greeting(&self.settings.greeting, &self.settings.bot.id);
    }

    // ============================================================================
    // Sessions
    // ============================================================================

    /// Rebuilds the session list.
    ///
    /// Returns silently when no session was held, like
    /// [`ChatSession::fetch_messages`].
    pub async fn fetch_sessions(&mut self) {
        if !self.ensure_session().await {
            return;
        }
        self.refresh_sessions().await;
    }

    async fn refresh_sessions(&mut self) {
        let request =
            GatewayRequest::scoped(RequestKind::GetSessions, self.current_session_id.as_deref());

        match self.call(&request).await {
            Ok(envelope) => self.apply_session_listing(SessionListing::from_envelope(&envelope)),
            Err(e) => {
                tracing::warn!("[ChatSession] Fetching sessions failed: {}", e);
                self.append_bot_message(e.to_string());
            }
        }
    }

    /// Replaces the local session list, prepending entries in server order.
    fn apply_session_listing(&mut self, listing: SessionListing) {
        let SessionListing::Replace(items) = listing else {
            tracing::debug!("[ChatSession] Session list unchanged");
            return;
        };

        self.sessions.clear();
        for item in items {
            let session = Session::new(
                item.sid,
                item.sname.unwrap_or_default(),
                self.settings.participants(),
            );
            self.sessions.insert(0, session);
        }
        tracing::debug!("[ChatSession] Session list rebuilt: {} entries", self.sessions.len());
        self.emit(ChatEvent::SessionsUpdated(self.sessions.clone()));
    }

    /// Clears the active session on the service, then resolves again.
    ///
    /// The resolution runs whether or not the clear call succeeded.
    pub async fn clear_session(&mut self) {
        let request =
            GatewayRequest::scoped(RequestKind::ClearSession, self.current_session_id.as_deref());

        match self.call(&request).await {
            Ok(envelope) => match Acknowledgement::from_envelope(&envelope) {
                Acknowledgement::Accepted => {
                    tracing::debug!("[ChatSession] Session cleared");
                }
                Acknowledgement::Rejected { reason } => {
                    tracing::warn!("[ChatSession] Clear was rejected: {:?}", reason);
                }
            },
            Err(e) => {
                tracing::warn!("[ChatSession] Clearing session failed: {}", e);
                self.append_bot_message(e.to_string());
            }
        }

        self.resolve_current_session(false).await;
    }

    /// Saves the active session on the service and starts a new one.
    ///
    /// The save response is applied as a session list; the final resolution
    /// (with creation) runs whether or not the save succeeded.
    pub async fn new_session(&mut self) {
        let request =
            GatewayRequest::scoped(RequestKind::SaveSession, self.current_session_id.as_deref());

        match self.call(&request).await {
            Ok(envelope) => self.apply_session_listing(SessionListing::from_envelope(&envelope)),
            Err(e) => {
                tracing::warn!("[ChatSession] Saving session failed: {}", e);
                self.append_bot_message(e.to_string());
            }
        }

        self.resolve_current_session(true).await;
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    /// One round trip; authentication rejections are reported before returning.
    async fn call(&self, request: &GatewayRequest) -> Result<Envelope> {
        tracing::debug!(
            "[ChatSession] -> {} (sid={:?})",
            request.kind,
            request.sid
        );
        let result = self.gateway.call(request).await;
        match &result {
            Ok(envelope) => {
                tracing::debug!("[ChatSession] <- {} status={}", request.kind, envelope.status);
            }
            Err(e @ ChatlineError::Unauthorized) => {
                self.error_reporter.report_unauthorized(request.kind, e);
            }
            Err(_) => {}
        }
        result
    }

    fn append_bot_message(&mut self, body: String) {
        let bot_id = self.settings.bot.id.clone();
        self.messages.append(body, bot_id, None);
    }

    fn emit(&self, event: ChatEvent) {
        if let Some(sink) = &self.event_sink {
            sink.emit(event);
        }
    }
}

#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;
