//! Session persistence
//!
//! The engine only needs two things from storage: the most recent session of a
//! user and an upsert keyed by session id. Ids are handed out by the store so
//! that "most recent" is simply the highest id.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::session::{SessionId, UserId, WordleSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Row-oriented store of sessions
pub trait SessionStore: Send + Sync {
    /// Reserve a fresh session id, larger than every id handed out before
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn next_id(&self) -> Result<SessionId, StoreError>;

    /// Most recent session of `user`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn latest_for_user(&self, user: &UserId) -> Result<Option<WordleSession>, StoreError>;

    /// Insert or replace the session with the same id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn upsert(&self, session: &WordleSession) -> Result<(), StoreError>;

    /// Every session of `user`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn sessions_for_user(&self, user: &UserId) -> Result<Vec<WordleSession>, StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn next_id(&self) -> Result<SessionId, StoreError> {
        (**self).next_id()
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<WordleSession>, StoreError> {
        (**self).latest_for_user(user)
    }

    fn upsert(&self, session: &WordleSession) -> Result<(), StoreError> {
        (**self).upsert(session)
    }

    fn sessions_for_user(&self, user: &UserId) -> Result<Vec<WordleSession>, StoreError> {
        (**self).sessions_for_user(user)
    }
}

/// In-memory table shared by the store implementations
#[derive(Debug, Default)]
struct SessionTable {
    sessions: BTreeMap<SessionId, WordleSession>,
    last_id: u64,
}

/// On-disk shape of a session table
#[derive(Serialize, Deserialize)]
struct TableSnapshot {
    last_id: u64,
    sessions: Vec<WordleSession>,
}

impl SessionTable {
    fn next_id(&mut self) -> SessionId {
        self.last_id += 1;
        SessionId(self.last_id)
    }

    fn latest_for_user(&self, user: &UserId) -> Option<WordleSession> {
        self.sessions
            .values()
            .rev()
            .find(|s| s.user_id() == user)
            .cloned()
    }

    fn upsert(&mut self, session: &WordleSession) {
        self.last_id = self.last_id.max(session.id().0);
        self.sessions.insert(session.id(), session.clone());
    }

    fn sessions_for_user(&self, user: &UserId) -> Vec<WordleSession> {
        self.sessions
            .values()
            .filter(|s| s.user_id() == user)
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            last_id: self.last_id,
            sessions: self.sessions.values().cloned().collect(),
        }
    }

    fn from_snapshot(snapshot: TableSnapshot) -> Self {
        let mut table = Self {
            sessions: BTreeMap::new(),
            last_id: snapshot.last_id,
        };
        for session in &snapshot.sessions {
            table.upsert(session);
        }
        table
    }
}
