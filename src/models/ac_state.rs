//! AC state records.
//!
//! [`ACStateData`] is the core set of AC settings. It is embedded by value in
//! every record that carries an AC state (device, timer, schedule, climate
//! react) and sent as-is in write payloads.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::common::{null_as_default, SensiboTime};

/// The settings of an air conditioner.
///
/// Optional fields are omitted from the JSON payload when `None`, so a
/// partial state only touches the settings that are set.
///
/// The target temperature is sent as a whole number of degrees, truncated
/// toward zero. A NaN or infinite temperature fails serialization.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::ACStateData;
///
/// let state = ACStateData {
///     on: true,
///     mode: Some("cool".to_string()),
///     fan_level: Some("auto".to_string()),
///     target_temperature: Some(22.0),
///     temperature_unit: Some("C".to_string()),
///     swing: Some("stopped".to_string()),
/// };
///
/// let json = serde_json::to_value(&state).unwrap();
/// assert_eq!(json["targetTemperature"], 22);
/// assert_eq!(json["fanLevel"], "auto");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ACStateData {
    /// Whether the AC is powered on.
    #[serde(deserialize_with = "null_as_default")]
    pub on: bool,

    /// Operating mode (`cool`, `heat`, `fan`, `dry`, `auto`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Fan level (`low`, `medium`, `high`, `auto`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_level: Option<String>,

    /// Target temperature, in [`temperature_unit`](Self::temperature_unit).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_whole_degrees"
    )]
    pub target_temperature: Option<f64>,

    /// Temperature unit (`C` or `F`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<String>,

    /// Vertical swing setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing: Option<String>,
}

#[allow(clippy::ref_option, clippy::cast_possible_truncation)]
fn serialize_whole_degrees<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(degrees) if degrees.is_finite() => serializer.serialize_i64(degrees.trunc() as i64),
        Some(degrees) => Err(S::Error::custom(format!(
            "target temperature must be a finite number, got {degrees}"
        ))),
        None => serializer.serialize_none(),
    }
}

/// An AC state as reported on a device, with the time it was applied.
///
/// On the wire the timestamp and the settings share one object; here the
/// settings are kept in [`state`](Self::state).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ACStateSnapshot {
    /// When this state was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<SensiboTime>,

    /// The AC settings.
    #[serde(flatten)]
    pub state: ACStateData,
}

/// An entry of a device's AC state log.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::ACState;
///
/// let entry: ACState = serde_json::from_str(r#"{
///     "id": "s1",
///     "status": "Success",
///     "acState": {"on": true, "mode": "heat", "targetTemperature": 24},
///     "changedProperties": ["on"],
///     "reason": "UserRequest"
/// }"#).unwrap();
///
/// assert_eq!(entry.ac_state.unwrap().state.mode.as_deref(), Some("heat"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ACState {
    /// Identifier of the state change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Outcome of the state change (e.g. `Success`, `Failed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The resulting AC state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_state: Option<ACStateSnapshot>,

    /// Names of the properties changed by this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_properties: Option<Vec<String>>,

    /// What triggered the change (e.g. `UserRequest`, `Trigger`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Why the change failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl ACState {
    /// Returns `true` if the vendor reports the change as applied.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() == Some("Success")
    }
}
