//! Error types

mod api;
mod fetch;
mod handoff;
mod selection;

pub use api::*;
pub use fetch::*;
pub use handoff::*;
pub use selection::*;

/// Top-level error type for the crate.
///
/// Wraps the individual error families so fallible operations that cross
/// collaborator boundaries (fetch, handoff, navigation) can return a single
/// type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error talking to the remote search service.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Selection constraint violation.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Error persisting or reading a handoff payload.
    #[error(transparent)]
    Handoff(#[from] HandoffError),

    /// Failed to open the follow-up view.
    #[error("Failed to open view: {0}")]
    Nav(#[source] std::io::Error),
}
