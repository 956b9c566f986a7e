//! Climate React (vendor name: "smart mode") records.

use serde::{Deserialize, Serialize};

use crate::models::ac_state::ACStateData;
use crate::models::common::null_as_default;

/// The AC state applied when a Climate React threshold is crossed.
///
/// On the wire the extra fields sit next to the AC settings in one object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClimateReactState {
    /// The AC settings.
    #[serde(flatten)]
    pub state: ACStateData,

    /// Horizontal swing setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_swing: Option<String>,

    /// Light setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

/// Climate React settings of a device.
///
/// Climate React switches the AC between two states based on a measured
/// value crossing a low or high threshold.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::ClimateReact;
///
/// let settings: ClimateReact = serde_json::from_str(r#"{
///     "enabled": true,
///     "type": "temperature",
///     "lowTemperatureThreshold": 19.5,
///     "lowTemperatureState": {"on": true, "mode": "heat"},
///     "highTemperatureThreshold": 26,
///     "highTemperatureState": {"on": true, "mode": "cool", "light": "off"}
/// }"#).unwrap();
///
/// assert!(settings.enabled);
/// assert_eq!(settings.high_temperature_state.unwrap().light.as_deref(), Some("off"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClimateReact {
    /// Whether Climate React is active.
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// The measurement the thresholds apply to (`temperature`, `humidity`, `feelsLike`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub react_type: Option<String>,

    /// Identifier of the device the settings belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_uid: Option<String>,

    /// Lower threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_temperature_threshold: Option<f64>,

    /// Upper threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_temperature_threshold: Option<f64>,

    /// State applied below the lower threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_temperature_state: Option<ClimateReactState>,

    /// State applied above the upper threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_temperature_state: Option<ClimateReactState>,

    /// Webhook called when the lower threshold is crossed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_temperature_webhook: Option<String>,

    /// Webhook called when the upper threshold is crossed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_temperature_webhook: Option<String>,
}
