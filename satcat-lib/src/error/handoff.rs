//! Handoff store error types

/// Errors that can occur while persisting or reading a handoff payload.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    /// Failed to serialize or deserialize the payload.
    #[error("Handoff payload error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store failed.
    #[error("Handoff store error: {0}")]
    Storage(#[from] async_sqlite::Error),
}
