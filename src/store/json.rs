//! JSON file session store
//!
//! The whole table is kept in memory and rewritten to disk after every upsert.
//! Writes go to a sibling temp file that is then renamed over the target, so a
//! crash mid-write leaves the previous table intact.

use super::{SessionStore, SessionTable, TableSnapshot};
use crate::error::StoreError;
use crate::session::{SessionId, UserId, WordleSession};
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Session store persisted as a JSON document
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: Mutex<SessionTable>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let table = match fs::read_to_string(&path) {
            Ok(content) => {
                let snapshot: TableSnapshot = serde_json::from_str(&content)?;
                SessionTable::from_snapshot(snapshot)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => SessionTable::default(),
            Err(e) => return Err(e.into()),
        };

        debug!(
            path = %path.display(),
            sessions = table.sessions.len(),
            "opened session store"
        );

        Ok(Self {
            path,
            inner: Mutex::new(table),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &SessionTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&table.snapshot())?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        trace!(path = %self.path.display(), "session store written");
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn next_id(&self) -> Result<SessionId, StoreError> {
        Ok(self.inner.lock().next_id())
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<WordleSession>, StoreError> {
        Ok(self.inner.lock().latest_for_user(user))
    }

    fn upsert(&self, session: &WordleSession) -> Result<(), StoreError> {
        let mut table = self.inner.lock();
        let previous = table.sessions.get(&session.id()).cloned();
        table.upsert(session);

        if let Err(e) = self.persist(&table) {
            // Keep memory and disk in agreement
            match previous {
                Some(previous) => table.upsert(&previous),
                None => {
                    table.sessions.remove(&session.id());
                }
            }
            return Err(e);
        }
        Ok(())
    }

    fn sessions_for_user(&self, user: &UserId) -> Result<Vec<WordleSession>, StoreError> {
        Ok(self.inner.lock().sessions_for_user(user))
    }
}
