//! Chat orchestrator: the per-session exchange.
//!
//! `respond()` replays the stored transcript, appends the new user turn,
//! and submits the whole sequence upstream -- no live chat object is
//! held between requests. The session lock is held for the full
//! exchange, so concurrent calls on one session serialize and the
//! transcript can only grow by a complete user+model turn pair.

use std::sync::Arc;

use tracing::debug;

use claimlens_types::chat::{ClaimContext, FileRef, Turn};
use claimlens_types::error::ChatError;
use claimlens_types::llm::GenerationConfig;

use crate::chat::preamble::build_user_turn;
use crate::llm::client::GenerativeClient;
use crate::llm::connector::ModelConnector;
use crate::session::SessionStore;

/// Orchestrates chat exchanges against the model connector and session
/// store. Generic over both ports so tests and alternative backends can
/// inject their own implementations.
pub struct ChatOrchestrator<C, S> {
    connector: Arc<ModelConnector<C>>,
    sessions: S,
    temperature: f64,
}

impl<C: GenerativeClient, S: SessionStore> ChatOrchestrator<C, S> {
    pub fn new(connector: Arc<ModelConnector<C>>, sessions: S, temperature: f64) -> Self {
        Self {
            connector,
            sessions,
            temperature,
        }
    }

    /// Access the session store (for stats reporting).
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Run one chat exchange for `session_id`.
    ///
    /// On success the transcript gains exactly the submitted user turn
    /// and a model turn holding the returned text. On failure the
    /// transcript is untouched and the caller must resend.
    pub async fn respond(
        &self,
        session_id: &str,
        message: &str,
        context: &ClaimContext,
        file_refs: &[FileRef],
    ) -> Result<String, ChatError> {
        let session = self.sessions.get_or_create(session_id).await;
        let mut transcript = session.lock().await;

        let user_turn = build_user_turn(message, context, file_refs);
        let mut contents = transcript.turns.clone();
        contents.push(user_turn.clone());

        let text = self
            .connector
            .generate(&contents, &GenerationConfig::chat(self.temperature))
            .await?;

        transcript.push_exchange(user_turn, Turn::model_text(text.clone()));
        debug!(
            session_id,
            turns = transcript.len(),
            "chat exchange recorded"
        );
        Ok(text)
    }
}
