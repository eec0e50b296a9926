//! In-memory session store.
//!
//! Process-lifetime map from session identifier to a shared transcript
//! handle. Demo-scale by design: no size cap, no expiry, no persistence.
//! The per-session mutex inside each handle is what serializes
//! concurrent exchanges for one session; the dashmap only guards the
//! identifier-to-handle mapping.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use claimlens_core::session::{SessionHandle, SessionStore};
use claimlens_types::chat::Transcript;

/// Session store backed by a concurrent in-process map.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionHandle>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, session_id: &str) -> SessionHandle {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id, "creating session");
                Arc::new(Mutex::new(Transcript::new()))
            })
            .clone()
    }

    async fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use claimlens_types::chat::Turn;

    #[tokio::test]
    async fn test_get_or_create_returns_same_handle() {
        let store = InMemorySessionStore::new();
        let first = store.get_or_create("s-1").await;
        let second = store.get_or_create("s-1").await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create("s-a").await;
        a.lock()
            .await
            .push_exchange(Turn::user(vec![]), Turn::model_text("hi"));

        let b = store.get_or_create("s-b").await;
        assert_eq!(b.lock().await.len(), 0);
        assert_eq!(a.lock().await.len(), 2);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_exchanges_serialize_per_session() {
        let store = Arc::new(InMemorySessionStore::new());

        let mut tasks = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let handle = store.get_or_create("shared").await;
                let mut transcript = handle.lock().await;
                let before = transcript.len();
                transcript.push_exchange(Turn::user(vec![]), Turn::model_text("ok"));
                // Holding the lock across the append means no other task
                // observed a half-recorded exchange.
                assert_eq!(transcript.len(), before + 2);
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let handle = store.get_or_create("shared").await;
        assert_eq!(handle.lock().await.len(), 20);
    }
}
