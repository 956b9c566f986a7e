//! The device record and its nested records.
//!
//! A [`Device`] (vendor name: "pod") is the largest record the API returns.
//! Which parts are populated depends on the `fields` selection passed to
//! the listing and lookup calls, so every part is optional.
//!
//! Some fields have no stable shape across device generations (a string on
//! one model, an object or `null` on another). They are kept as raw
//! [`serde_json::Value`] rather than failing the whole decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ac_state::ACStateSnapshot;
use crate::models::climate_react::ClimateReact;
use crate::models::common::{null_as_default, SensiboTime};
use crate::models::schedule::DeviceSchedule;
use crate::models::timer::DeviceTimer;

/// The room a device is installed in.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Room {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// The location (home) a device belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Latitude and longitude.
    #[serde(deserialize_with = "null_as_default")]
    pub lat_lon: Vec<f64>,

    #[serde(deserialize_with = "null_as_default")]
    pub address: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<SensiboTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<SensiboTime>,

    /// Geofence radius, in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geofence_trigger_radius: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<Value>,
}

/// Whether the device is reachable by the vendor cloud.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub is_alive: bool,

    /// Last time the device reported in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<SensiboTime>,
}

/// Offsets applied to the device's sensor readings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SensorsCalibration {
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
}

/// Filter cleaning status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FiltersCleaning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_on_seconds_since_last_filters_clean: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_clean_seconds_threshold: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_filters_clean_time: Option<Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub should_clean_filters: bool,
}

/// Temperatures a mode accepts in one unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteTemperature {
    /// Whether this is the unit the AC natively uses.
    #[serde(deserialize_with = "null_as_default")]
    pub is_native: bool,
    /// Accepted values, ascending.
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<f64>,
}

/// Settings an AC mode accepts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteMode {
    /// Accepted temperatures, keyed by unit (`C`, `F`).
    #[serde(deserialize_with = "null_as_default")]
    pub temperatures: HashMap<String, RemoteTemperature>,
    #[serde(deserialize_with = "null_as_default")]
    pub fan_levels: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub swing: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub horizontal_swing: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub light: Vec<String>,
}

/// What the AC remote supports, keyed by mode name.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RemoteCapabilities {
    #[serde(deserialize_with = "null_as_default")]
    pub modes: HashMap<String, RemoteMode>,
}

impl RemoteCapabilities {
    /// Returns the capabilities of `mode`, if the remote supports it.
    #[must_use]
    pub fn mode(&self, mode: &str) -> Option<&RemoteMode> {
        self.modes.get(mode)
    }
}

/// Remote control behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Remote {
    #[serde(deserialize_with = "null_as_default")]
    pub toggle: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub window: bool,
}

/// The latest sensor readings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SensiboTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_voltage: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub piezo: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm25: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvoc: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2: Option<f64>,
}

/// The device's own Wi-Fi access point (used during setup).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccessPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A Sensibo device.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::Device;
///
/// let device: Device = serde_json::from_str(r#"{
///     "id": "abc",
///     "room": {"uid": "r1", "name": "Bedroom"},
///     "acState": {"on": true, "mode": "cool", "targetTemperature": 22},
///     "connectionStatus": {"isAlive": true}
/// }"#).unwrap();
///
/// assert_eq!(device.room_name(), Some("Bedroom"));
/// assert!(device.is_on());
/// assert!(device.is_alive());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    /// Device identifier, used in every per-device call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identifier printed on the device's QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_id: Option<String>,

    /// Display temperature unit (`C` or `F`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,

    /// The current AC state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_state: Option<ACStateSnapshot>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<ConnectionStatus>,

    // Firmware
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_available_firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_group: Option<String>,

    // Geofencing and notifications
    #[serde(deserialize_with = "null_as_default")]
    pub is_geofence_on_enter_enabled_for_this_user: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_climate_react_geofence_on_enter_enabled_for_this_user: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_motion_geofence_on_enter_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_geofence_on_exit_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_climate_react_geofence_on_exit_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_motion_geofence_on_exit_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_owner: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub clean_filters_notification_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub should_show_filter_cleaning_notification: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors_calibration: Option<SensorsCalibration>,

    #[serde(deserialize_with = "null_as_default")]
    pub motion_sensors: Vec<Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// The timer currently set, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<DeviceTimer>,

    #[serde(deserialize_with = "null_as_default")]
    pub schedules: Vec<DeviceSchedule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_config: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_cleaning: Option<FiltersCleaning>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_is_occupied: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_measurements_sensor: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pure_boost_config: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_eligible: Option<Value>,

    /// Feature flags enabled for the device.
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_healthcheck: Option<Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub homekit_supported: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_capabilities: Option<RemoteCapabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<Remote>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_flavor: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub remote_alternatives: Vec<String>,

    /// Climate React settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_mode: Option<ClimateReact>,

    /// The latest sensor readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_point: Option<AccessPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

impl Device {
    /// Returns `true` if the AC is reported as on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.ac_state.as_ref().is_some_and(|s| s.state.on)
    }

    /// Returns `true` if the device is connected to the vendor cloud.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.connection_status.as_ref().is_some_and(|c| c.is_alive)
    }

    /// Returns the room name, if known.
    #[must_use]
    pub fn room_name(&self) -> Option<&str> {
        self.room.as_ref().and_then(|r| r.name.as_deref())
    }

    /// Returns the current target temperature, if known.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.ac_state
            .as_ref()
            .and_then(|s| s.state.target_temperature)
    }
}
