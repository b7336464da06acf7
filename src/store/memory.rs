//! In-memory session store

use super::{SessionStore, SessionTable};
use crate::error::StoreError;
use crate::session::{SessionId, UserId, WordleSession};
use parking_lot::Mutex;
use tracing::trace;

/// Session store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<SessionTable>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored sessions across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn next_id(&self) -> Result<SessionId, StoreError> {
        Ok(self.inner.lock().next_id())
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<WordleSession>, StoreError> {
        Ok(self.inner.lock().latest_for_user(user))
    }

    fn upsert(&self, session: &WordleSession) -> Result<(), StoreError> {
        trace!(session = %session.id(), user = %session.user_id(), "upserting session");
        self.inner.lock().upsert(session);
        Ok(())
    }

    fn sessions_for_user(&self, user: &UserId) -> Result<Vec<WordleSession>, StoreError> {
        Ok(self.inner.lock().sessions_for_user(user))
    }
}
