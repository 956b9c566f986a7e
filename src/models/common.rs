//! Small records shared by several Sensibo resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a field that the API may send as `null`, using the type's
/// default value in that case.
///
/// Used with `#[serde(deserialize_with = "null_as_default")]` on every
/// non-`Option` field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A point in time as reported by the API.
///
/// The vendor sends both an RFC 3339 timestamp and the number of seconds
/// elapsed at the time of the response.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::SensiboTime;
///
/// let time: SensiboTime = serde_json::from_str(
///     r#"{"time": "2024-05-01T12:30:00Z", "secondsAgo": 42}"#,
/// ).unwrap();
///
/// assert_eq!(time.seconds_ago, Some(42.0));
/// assert!(time.parsed_time().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SensiboTime {
    /// RFC 3339 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Seconds between this time and the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_ago: Option<f64>,
}

impl SensiboTime {
    /// Parses [`time`](Self::time) as an RFC 3339 timestamp.
    ///
    /// Returns `None` if the field is missing or malformed.
    #[must_use]
    pub fn parsed_time(&self) -> Option<DateTime<Utc>> {
        self.time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc))
    }
}

/// The user who performed an action (created a timer, schedule, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CausedBy {
    /// Account user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
