//! Terminal fetch failure descriptor

use crate::error::ApiError;
use crate::response::SearchResponse;

/// Describes a failed catalog fetch.
///
/// Captures the remote service's own status and message verbatim when the
/// response carried a failure discriminant, or a normalized form of a
/// transport-level error. A fetch failure is terminal for the page lifetime;
/// it is surfaced to the user and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Status code reported by the service, if any.
    pub status: Option<u16>,
    /// Failure message, verbatim.
    pub message: String,
}

impl FetchFailure {
    /// Creates a new fetch failure.
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds a failure from a response whose discriminant was not `"OK"`.
    ///
    /// The response's status and message fields are captured as-is.
    pub fn from_response(response: &SearchResponse) -> Self {
        Self {
            status: response.status,
            message: response.message.clone(),
        }
    }
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
