//! Process-scoped session registry.
//!
//! Maps a session id to the conversation's current [`DialogState`].
//! Different sessions run in parallel; two overlapping turns for the
//! *same* session serialize on the per-session mutex (last-applied
//! transition wins, no merge semantics).
//!
//! Entries carry a last-seen timestamp and are evicted after a TTL so
//! the map does not grow without bound over the process lifetime.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::Mutex;

use polyskill_types::dialog::DialogState;

/// Concurrent session-id -> dialog-state registry with TTL eviction.
pub struct SessionStore {
    sessions: DashMap<String, SessionSlot>,
    ttl: Duration,
}

struct SessionSlot {
    state: Arc<Mutex<DialogState>>,
    last_seen: Instant,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Look up (or create) the state lock for a session.
    ///
    /// A new conversation, or one the platform marks as new again,
    /// starts at [`DialogState::Hello`]. Expired entries are swept on
    /// every acquire; the returned lock stays valid for callers that
    /// acquired it before the sweep.
    pub fn acquire(&self, session_id: &str, is_new_session: bool) -> Arc<Mutex<DialogState>> {
        self.sessions
            .retain(|_, slot| slot.last_seen.elapsed() < self.ttl);

        if is_new_session {
            let slot = SessionSlot::fresh();
            let lock = Arc::clone(&slot.state);
            self.sessions.insert(session_id.to_string(), slot);
            return lock;
        }

        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionSlot::fresh);
        entry.last_seen = Instant::now();
        Arc::clone(&entry.state)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionSlot {
    fn fresh() -> Self {
        Self {
            state: Arc::new(Mutex::new(DialogState::Hello)),
            last_seen: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_session_starts_at_hello() {
        let store = SessionStore::new(Duration::from_secs(60));
        let lock = store.acquire("s1", false);
        assert_eq!(*lock.lock().await, DialogState::Hello);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_state_survives_across_turns() {
        let store = SessionStore::new(Duration::from_secs(60));
        {
            let lock = store.acquire("s1", false);
            *lock.lock().await = DialogState::Translator;
        }
        let lock = store.acquire("s1", false);
        assert_eq!(*lock.lock().await, DialogState::Translator);
    }

    #[tokio::test]
    async fn test_new_session_flag_resets_state() {
        let store = SessionStore::new(Duration::from_secs(60));
        {
            let lock = store.acquire("s1", false);
            *lock.lock().await = DialogState::Maps;
        }
        let lock = store.acquire("s1", true);
        assert_eq!(*lock.lock().await, DialogState::Hello);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new(Duration::from_secs(60));
        {
            let lock = store.acquire("s1", false);
            *lock.lock().await = DialogState::ScanUrl;
        }
        let lock = store.acquire("s2", false);
        assert_eq!(*lock.lock().await, DialogState::Hello);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_evicted() {
        let store = SessionStore::new(Duration::from_millis(10));
        {
            let lock = store.acquire("stale", false);
            *lock.lock().await = DialogState::Weather;
        }
        tokio::time::sleep(Duration::from_millis(30)).await;
        // Acquiring any session sweeps expired entries, so the stale
        // conversation restarts from Hello.
        let lock = store.acquire("stale", false);
        assert_eq!(*lock.lock().await, DialogState::Hello);
        assert_eq!(store.len(), 1);
    }
}
