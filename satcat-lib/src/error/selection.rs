//! Selection error types

/// Errors raised by selection operations.
///
/// These are local validation errors, fully recoverable by deselecting an
/// existing entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The selection already holds the maximum number of records.
    #[error("Selection limit exceeded. Max allowed is {limit}.")]
    LimitExceeded {
        /// The selection capacity that was hit.
        limit: usize,
    },
}
