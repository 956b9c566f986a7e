//! The `{status, result}` wrapper around every read response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A decoded read response.
///
/// `result` is required: a body without it fails to decode.
///
/// # Example
///
/// ```rust
/// use sensibo_api::api::Envelope;
/// use sensibo_api::models::Device;
///
/// let envelope: Envelope<Device> =
///     serde_json::from_str(r#"{"status": "success", "result": {"id": "abc"}}"#).unwrap();
///
/// assert_eq!(envelope.status, "success");
/// assert_eq!(envelope.into_inner().id.as_deref(), Some("abc"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// The vendor's status text.
    #[serde(default)]
    pub status: String,
    /// The payload.
    pub result: T,
}

impl<T> Envelope<T> {
    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.result
    }
}

/// Decodes `body` as an envelope and returns its `result`.
pub(crate) fn decode_result<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str::<Envelope<T>>(body).map(Envelope::into_inner)
}
