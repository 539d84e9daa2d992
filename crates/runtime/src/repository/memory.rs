use std::sync::RwLock;

use serde_json::Value;
use widget_core::SnapshotEntries;

use super::error::{RepositoryError, Result};
use super::traits::SnapshotStore;

/// In-memory implementation of SnapshotStore.
///
/// Writers replace the whole entry map under the lock, so a reader never sees
/// half of an update.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    entries: RwLock<SnapshotEntries>,
}

impl InMemorySnapshotStore {
    pub fn new(entries: SnapshotEntries) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Replace the whole snapshot.
    pub fn commit(&self, entries: SnapshotEntries) -> Result<()> {
        let mut current = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = entries;
        Ok(())
    }

    /// Overwrite a single key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let mut current = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        current.insert(key.into(), value.into());
        Ok(())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<SnapshotEntries> {
        let current = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(current.clone())
    }
}
