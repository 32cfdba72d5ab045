//! In-memory handoff store backed by DashMap

use async_trait::async_trait;
use dashmap::DashMap;

use super::HandoffEntry;
use super::HandoffStore;
use crate::error::HandoffError;

/// An in-memory handoff store backed by a concurrent hash map.
///
/// Payloads live for the lifetime of the process. This is the right store
/// when the follow-up view runs in the same process; use
/// [`super::SqliteHandoffStore`] when it does not.
#[derive(Debug, Default)]
pub struct InMemoryHandoffStore {
    store: DashMap<String, HandoffEntry>,
}

impl InMemoryHandoffStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns the number of stored payloads.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl HandoffStore for InMemoryHandoffStore {
    async fn get(&self, key: &str) -> Result<Option<HandoffEntry>, HandoffError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, entry: HandoffEntry) -> Result<(), HandoffError> {
        self.store.insert(key.to_string(), entry);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), HandoffError> {
        self.store.remove(key);
        Ok(())
    }
}
