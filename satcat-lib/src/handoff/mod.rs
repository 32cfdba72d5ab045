//! Selection handoff persistence
//!
//! Provides a `HandoffStore` trait and implementations for passing the
//! selected records to a follow-up view through key-value storage. The
//! store is shared, and each proceed action overwrites the key
//! unconditionally: last writer wins, no merge.

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::error::HandoffError;
use crate::model::SatelliteRecord;

/// The fixed key under which the selection is handed to the follow-up view.
pub const SELECTED_RECORDS_KEY: &str = "selectedRowData";

/// A handoff payload with the time it was stored.
///
/// The payload is the selected records serialized as JSON, so the follow-up
/// view can read it without this crate's types if it wants to.
#[derive(Debug, Clone)]
pub struct HandoffEntry {
    /// The payload, serialized as JSON.
    pub data: Vec<u8>,
    /// When this payload was stored.
    pub stored_at: DateTime<Utc>,
}

impl HandoffEntry {
    /// Creates an entry from an already-serialized payload.
    pub fn new(data: Vec<u8>, stored_at: DateTime<Utc>) -> Self {
        Self { data, stored_at }
    }

    /// Serializes the given records into an entry stamped with the current time.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a SatelliteRecord>,
    ) -> Result<Self, HandoffError> {
        let records: Vec<&SatelliteRecord> = records.into_iter().collect();
        let data = serde_json::to_vec(&records)?;
        Ok(Self {
            data,
            stored_at: Utc::now(),
        })
    }

    /// Deserializes the payload back into records.
    pub fn records(&self) -> Result<Vec<SatelliteRecord>, HandoffError> {
        Ok(serde_json::from_slice(&self.data)?)
    }
}

/// Trait for handoff stores.
///
/// Implementations store and retrieve payloads by string keys. Writing an
/// existing key replaces its payload.
///
/// # Example
///
/// ```ignore
/// use satcat_lib::handoff::{HandoffEntry, HandoffStore, InMemoryHandoffStore, SELECTED_RECORDS_KEY};
///
/// let store = InMemoryHandoffStore::new();
/// let entry = HandoffEntry::from_records(&selection)?;
/// store.set(SELECTED_RECORDS_KEY, entry).await?;
///
/// if let Some(entry) = store.get(SELECTED_RECORDS_KEY).await? {
///     let records = entry.records()?;
/// }
/// ```
#[async_trait]
pub trait HandoffStore: Send + Sync {
    /// Retrieves the payload stored under a key.
    async fn get(&self, key: &str) -> Result<Option<HandoffEntry>, HandoffError>;

    /// Stores a payload under a key, replacing any previous payload.
    async fn set(&self, key: &str, entry: HandoffEntry) -> Result<(), HandoffError>;

    /// Removes the payload stored under a key.
    async fn remove(&self, key: &str) -> Result<(), HandoffError>;
}
