//! Session store abstraction.
//!
//! The store maps opaque client-generated session identifiers to shared
//! transcript handles. Implementations live in claimlens-infra (e.g.,
//! `InMemorySessionStore`); the orchestrator only sees this trait, so a
//! durable backing store can be swapped in without touching core.

use std::sync::Arc;

use tokio::sync::Mutex;

use claimlens_types::chat::Transcript;

/// Shared handle to one session's transcript.
///
/// The mutex is per session: holding it across a full exchange both
/// serializes concurrent appends for that session and makes the
/// user-turn/model-turn pair append atomic. Different sessions never
/// contend.
pub type SessionHandle = Arc<Mutex<Transcript>>;

/// Store of per-session transcripts, created on first reference.
///
/// No size cap, no expiry, no cross-restart persistence: session
/// lifetime equals process uptime.
pub trait SessionStore: Send + Sync {
    /// Fetch the handle for `session_id`, creating an empty transcript
    /// on first reference.
    fn get_or_create(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = SessionHandle> + Send;

    /// Number of sessions currently held.
    fn session_count(&self) -> impl std::future::Future<Output = usize> + Send;
}
