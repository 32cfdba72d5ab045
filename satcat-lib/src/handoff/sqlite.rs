//! SQLite-backed persistent handoff store.

use std::path::Path;

use async_sqlite::rusqlite;
use async_sqlite::Client;
use async_sqlite::ClientBuilder;
use async_sqlite::JournalMode;
use async_trait::async_trait;
use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

use super::HandoffEntry;
use super::HandoffStore;
use crate::error::HandoffError;

/// A persistent handoff store backed by SQLite.
///
/// Payloads survive process restarts, so a follow-up view launched as a
/// separate process can pick up the selection. Uses WAL journal mode for
/// better concurrent read performance.
///
/// # Example
///
/// ```ignore
/// use satcat_lib::handoff::SqliteHandoffStore;
///
/// // File-based store
/// let store = SqliteHandoffStore::open("handoff.db").await?;
///
/// // In-memory store (for testing)
/// let store = SqliteHandoffStore::open_in_memory().await?;
/// ```
pub struct SqliteHandoffStore {
    client: Client,
}

impl SqliteHandoffStore {
    /// Opens a SQLite store at the specified path.
    ///
    /// Creates the database file and handoff table if they don't exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, HandoffError> {
        let client = ClientBuilder::new()
            .path(path)
            .journal_mode(JournalMode::Wal)
            .open()
            .await?;

        Self::init_schema(&client).await?;

        Ok(Self { client })
    }

    /// Opens an in-memory SQLite store.
    ///
    /// Useful for testing. Data is lost when the store is dropped.
    pub async fn open_in_memory() -> Result<Self, HandoffError> {
        let client = ClientBuilder::new().path(":memory:").open().await?;

        Self::init_schema(&client).await?;

        Ok(Self { client })
    }

    /// Initializes the handoff table schema.
    async fn init_schema(client: &Client) -> Result<(), HandoffError> {
        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS handoff (
                        key TEXT PRIMARY KEY,
                        data BLOB NOT NULL,
                        stored_at INTEGER NOT NULL
                    )",
                    [],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Returns the number of stored payloads.
    pub async fn len(&self) -> Result<usize, HandoffError> {
        let count = self
            .client
            .conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM handoff", [], |row| {
                    row.get::<_, i64>(0)
                })
            })
            .await?;
        Ok(count as usize)
    }

    /// Returns `true` if the store is empty.
    pub async fn is_empty(&self) -> Result<bool, HandoffError> {
        self.len().await.map(|len| len == 0)
    }
}

#[async_trait]
impl HandoffStore for SqliteHandoffStore {
    async fn get(&self, key: &str) -> Result<Option<HandoffEntry>, HandoffError> {
        let key = key.to_string();

        let result = self
            .client
            .conn(move |conn| {
                conn.query_row(
                    "SELECT data, stored_at FROM handoff WHERE key = ?",
                    rusqlite::params![key],
                    |row| {
                        let data: Vec<u8> = row.get(0)?;
                        let stored_at: i64 = row.get(1)?;
                        Ok((data, stored_at))
                    },
                )
            })
            .await;

        match result {
            Ok((data, stored_at)) => {
                let stored_at = Utc
                    .timestamp_opt(stored_at, 0)
                    .single()
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                Ok(Some(HandoffEntry::new(data, stored_at)))
            }
            Err(async_sqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, entry: HandoffEntry) -> Result<(), HandoffError> {
        let key = key.to_string();
        let data = entry.data;
        let stored_at = entry.stored_at.timestamp();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO handoff (key, data, stored_at) VALUES (?, ?, ?)",
                    rusqlite::params![key, data, stored_at],
                )
            })
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), HandoffError> {
        let key = key.to_string();

        self.client
            .conn(move |conn| conn.execute("DELETE FROM handoff WHERE key = ?", [key]))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectType;
    use crate::model::SatelliteRecord;

    #[tokio::test]
    async fn test_round_trip() {
        let store = SqliteHandoffStore::open_in_memory().await.unwrap();
        let records = vec![
            SatelliteRecord::new("1", "Alpha", "100", ObjectType::Payload, "LEO"),
            SatelliteRecord::new("2", "Beta", "200", ObjectType::Debris, "GEO"),
        ];

        let entry = HandoffEntry::from_records(&records).unwrap();
        store.set("key", entry).await.unwrap();

        let read = store.get("key").await.unwrap().unwrap();
        assert_eq!(read.records().unwrap(), records);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = SqliteHandoffStore::open_in_memory().await.unwrap();
        assert!(store.get("absent").await.unwrap().is_none());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_payload() {
        let store = SqliteHandoffStore::open_in_memory().await.unwrap();
        let first = vec![SatelliteRecord::new(
            "1",
            "Alpha",
            "100",
            ObjectType::Payload,
            "LEO",
        )];
        let second = vec![SatelliteRecord::new(
            "2",
            "Beta",
            "200",
            ObjectType::Debris,
            "GEO",
        )];

        store
            .set("key", HandoffEntry::from_records(&first).unwrap())
            .await
            .unwrap();
        store
            .set("key", HandoffEntry::from_records(&second).unwrap())
            .await
            .unwrap();

        let read = store.get("key").await.unwrap().unwrap();
        assert_eq!(read.records().unwrap(), second);
    }
}
