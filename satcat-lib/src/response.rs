//! Search service response contract

use serde::Deserialize;
use serde::Serialize;

use crate::model::SatelliteRecord;

/// The `message` value that marks a successful search response.
pub const MESSAGE_OK: &str = "OK";

/// Status-tagged payload returned by the remote search service.
///
/// The service reports failure in-band: any `message` other than
/// [`MESSAGE_OK`] is a failure, and the response's own `status` and
/// `message` are surfaced verbatim to the user.
///
/// # Example
///
/// ```
/// use satcat_lib::SearchResponse;
///
/// let response: SearchResponse =
///     serde_json::from_str(r#"{"message":"ERR","status":500}"#).unwrap();
///
/// assert!(!response.is_success());
/// assert_eq!(response.status, Some(500));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Status message; [`MESSAGE_OK`] on success.
    pub message: String,

    /// Status code, present on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// The fetched records, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SatelliteRecord>>,
}

impl SearchResponse {
    /// Creates a successful response carrying the given records.
    pub fn ok(records: Vec<SatelliteRecord>) -> Self {
        Self {
            message: MESSAGE_OK.to_string(),
            status: None,
            data: Some(records),
        }
    }

    /// Creates a failure response with the given status and message.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            data: None,
        }
    }

    /// Returns `true` if the discriminant marks this response as successful.
    pub fn is_success(&self) -> bool {
        self.message == MESSAGE_OK
    }

    /// Consumes the response and returns its records, empty if absent.
    pub fn into_records(self) -> Vec<SatelliteRecord> {
        self.data.unwrap_or_default()
    }
}
